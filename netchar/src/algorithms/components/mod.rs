pub mod connected_components;
