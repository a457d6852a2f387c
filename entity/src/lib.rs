pub mod answer;
pub mod content;
pub mod question;
pub mod question_category;
pub mod section;
pub mod user;

/*
 Two independent subgraphs hang off this schema:
   user -> section -> content                (ownership-scoped; owner fixed at creation)
   question_category -> question -> answer   (no ownership scoping)
 Deleting a parent cascades at the FK level, so a section takes its
 contents with it and a category takes its questions and their answers.
 */
