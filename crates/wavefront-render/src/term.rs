//! Coloured terminal rendering via crossterm.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};

use wavefront_core::OccupancyGrid;
use wavefront_paths::{DistanceField, Trajectory};

use crate::overlay::{Glyph, Overlay};

const LOW: (u8, u8, u8) = (68, 1, 84);
const HIGH: (u8, u8, u8) = (253, 231, 37);

/// Maps a distance onto a dark-to-bright ramp, `max` being brightest.
fn distance_color(v: i32, max: i32) -> Color {
    if max <= 0 {
        return Color::Rgb {
            r: LOW.0,
            g: LOW.1,
            b: LOW.2,
        };
    }
    let t = v.clamp(0, max) as f32 / max as f32;
    let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color::Rgb {
        r: lerp(LOW.0, HIGH.0),
        g: lerp(LOW.1, HIGH.1),
        b: lerp(LOW.2, HIGH.2),
    }
}

/// Write the grid with distances coloured by magnitude, the start in green,
/// the path in red and goals in yellow.
pub fn draw<W: Write>(
    out: &mut W,
    grid: &OccupancyGrid,
    field: &DistanceField,
    path: Option<&Trajectory>,
) -> io::Result<()> {
    let overlay = Overlay::new(grid, field, path);
    let max = overlay.max_distance();

    for row in overlay.rows() {
        for g in row {
            match g {
                Glyph::Start => {
                    queue!(
                        out,
                        SetAttribute(Attribute::Bold),
                        SetForegroundColor(Color::Green),
                        Print(" S "),
                        SetAttribute(Attribute::Reset)
                    )?;
                }
                Glyph::Path => {
                    queue!(
                        out,
                        SetAttribute(Attribute::Bold),
                        SetForegroundColor(Color::Red),
                        Print(" * "),
                        SetAttribute(Attribute::Reset)
                    )?;
                }
                Glyph::Obstacle => {
                    queue!(out, SetForegroundColor(Color::DarkGrey), Print(" X "))?;
                }
                Glyph::Goal => {
                    queue!(out, SetForegroundColor(Color::Yellow), Print(" G "))?;
                }
                Glyph::Unreachable => {
                    queue!(out, SetForegroundColor(Color::DarkGrey), Print(" . "))?;
                }
                Glyph::Distance(v) => {
                    queue!(
                        out,
                        SetForegroundColor(distance_color(v, max)),
                        Print(format!("{v:2} "))
                    )?;
                }
            }
        }
        queue!(out, ResetColor, Print("\n"))?;
    }
    out.flush()
}
