pub mod fractal_tree;
pub mod julia;
pub mod mondrian;
pub mod print10;
pub mod voronoi;
