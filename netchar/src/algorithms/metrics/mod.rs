pub mod assortativity;
pub mod clustering_coefficient;
pub mod degree;
