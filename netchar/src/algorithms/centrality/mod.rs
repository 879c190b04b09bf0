pub mod betweenness;
pub mod closeness_centrality;
pub mod current_flow;
pub mod eigenvector;
