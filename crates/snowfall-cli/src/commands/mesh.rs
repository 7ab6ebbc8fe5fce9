//! `snowfall mesh` - generate a flake mesh, print stats, optionally export OBJ

use anyhow::{bail, Result};
use snowfall_fractal::{snowflake_mesh, triangles_per_edge, FlakeMesh};
use std::io::Write;
use std::path::Path;

pub fn run(depth: i32, output: Option<&Path>) -> Result<()> {
    if depth < -1 {
        bail!("depth must be >= -1, got {depth}");
    }
    if depth > 8 {
        bail!("depth {depth} would emit ~{} triangles per edge; refusing", triangles_per_edge(8));
    }

    let mesh = snowflake_mesh(depth);
    println!(
        "[mesh] depth {}: {} triangles per edge, {} triangles total, {} vertices, area {:.4}",
        depth,
        triangles_per_edge(depth),
        mesh.triangle_count(),
        mesh.vertex_count(),
        mesh.area()
    );

    if let Some(path) = output {
        write_obj(&mesh, path)?;
        println!("[mesh] Wrote {}", path.display());
    }
    Ok(())
}

/// Write the triangle soup as a Wavefront OBJ (1-based face indices)
fn write_obj(mesh: &FlakeMesh, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    let mut out = std::io::BufWriter::new(file);

    writeln!(out, "# Koch snowflake, {} triangles", mesh.triangle_count())?;
    for v in &mesh.vertices {
        writeln!(out, "v {} {} {}", v.x, v.y, v.z)?;
    }
    for i in 0..mesh.triangle_count() {
        let base = i * 3 + 1;
        writeln!(out, "f {} {} {}", base, base + 1, base + 2)?;
    }
    out.flush()?;
    Ok(())
}
