pub mod m202607150001_create_students;
pub mod m202607150002_create_lecturers;
pub mod m202607150003_create_student_selections;
pub mod m202607200001_create_issues;
