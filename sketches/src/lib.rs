use gallery::prelude::*;

pub mod sketches;

use sketches::animated::{
    dla, dragon, flow_field, sierpinski, tangled_web, walkers,
};
use sketches::still::{fractal_tree, julia, mondrian, print10, voronoi};

/// Every sketch in the gallery, in registration order.
pub fn registry() -> Result<RuntimeRegistry> {
    register_sketches! {
        {
            title: "Still",
            enabled: true,
            sketches: [
                print10,
                mondrian,
                fractal_tree,
                voronoi,
                julia,
            ]
        },
        {
            title: "Animated",
            enabled: true,
            sketches: [
                dragon,
                sierpinski,
                tangled_web,
                walkers,
                flow_field,
                dla,
            ]
        },
    }
}
