//! Hello: Smallest possible tour of the surface API.
//!
//! Runs headless against the software backend and dumps the grid as text.

use glyphgrid::{Channels, RegionSpec, Rgba, SoftwareBackend, Surface, SurfaceConfig};

fn main() {
    println!("Glyphgrid Hello");
    println!("===============");
    println!();
    println!("Cell size: {} bytes", std::mem::size_of::<glyphgrid::Cell>());
    println!("Rgba size: {} bytes", std::mem::size_of::<Rgba>());
    println!();

    let mut surface = Surface::new(
        SoftwareBackend::new(),
        SurfaceConfig {
            width: 24,
            height: 6,
            auto_update: false,
            ..SurfaceConfig::default()
        },
    );
    let (cw, ch) = surface.cell_size();
    println!(
        "Surface: {}x{} cells, {}x{} px ({}x{} px per cell)",
        surface.width(),
        surface.height(),
        surface.pixel_width(),
        surface.pixel_height(),
        cw,
        ch,
    );
    println!();

    surface.write("Hello, glyphgrid!\n");
    surface.write_with("Colors per cell.\n", Some(Rgba::new(255, 200, 0)), None);
    surface.print_all(&[&"tabs", &"work:\tsee?"], " ", "\n", None, None);

    // Stamp a border column with put_char, then mirror a block with
    // copy/paste
    let right = surface.width() - 1;
    for y in 0..surface.height() {
        surface.put_char('|', right, y, None, None);
    }
    if let Ok(Some(block)) = surface.copy(Channels::CHARS, RegionSpec::sized(0, 0, 8, 2)) {
        let _ = surface.paste(&block, Channels::CHARS, RegionSpec::at(14, 3));
    }

    let repainted = surface.update();
    println!("Repainted {repainted} cells:");
    println!();
    println!("{}", surface.read());
}
