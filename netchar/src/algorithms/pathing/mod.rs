pub mod distances;
