pub mod dla;
pub mod dragon;
pub mod flow_field;
pub mod sierpinski;
pub mod tangled_web;
pub mod walkers;
