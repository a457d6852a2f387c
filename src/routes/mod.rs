use actix_web::web;

pub mod content;
pub mod health;
pub mod quiz;
pub mod section;
pub mod user;
pub mod validate;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").service(health::health));
    cfg.service(web::scope("/validate").service(validate::validate));

    cfg.service(
        web::scope("/api")
            .service(
                web::scope("/users")
                    // fixed segment registered before /{id}
                    .service(user::regenerate::regenerate)
                    .service(user::list_create::create)
                    .service(user::list_create::list)
                    .service(user::detail::get)
                    .service(user::detail::update)
                    .service(user::detail::delete),
            )
            .service(
                web::scope("/sections")
                    .service(section::list_create::create)
                    .service(section::list_create::list)
                    .service(section::detail::get)
                    .service(section::detail::update)
                    .service(section::detail::delete),
            )
            .service(
                web::scope("/contents")
                    .service(content::list_create::create)
                    .service(content::list_create::list)
                    .service(content::detail::get)
                    .service(content::detail::update)
                    .service(content::detail::delete),
            )
            .service(
                web::scope("/quiz")
                    .service(
                        web::scope("/categories")
                            .service(quiz::category::create)
                            .service(quiz::category::list)
                            .service(quiz::category::get)
                            .service(quiz::category::update)
                            .service(quiz::category::delete),
                    )
                    .service(
                        web::scope("/questions")
                            .service(quiz::question::create)
                            .service(quiz::question::list)
                            .service(quiz::question::get)
                            .service(quiz::question::update)
                            .service(quiz::question::delete),
                    )
                    .service(
                        web::scope("/answers")
                            .service(quiz::answer::create)
                            .service(quiz::answer::list)
                            .service(quiz::answer::get)
                            .service(quiz::answer::update)
                            .service(quiz::answer::delete),
                    )
                    .service(web::scope("/check_answer").service(quiz::check_answer::check_answer)),
            ),
    );
}
