//! Textual command interpreter for the sketch pad.
//!
//! Grammar: the first whitespace-delimited token selects the command,
//! case-insensitively; every remaining token must parse as a number, with
//! exact arity per command. Anything else is a [`CommandError`] carrying a
//! message fit for inline display; errors never leave partial state behind.

use crate::shapes::SketchShape;
use jigkit_core::error::CommandError;

/// A parsed sketch command, ready to apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SketchCommand {
    Draw(SketchShape),
    Extrude { height: f64 },
}

/// Parses one command line.
pub fn parse(input: &str) -> Result<SketchCommand, CommandError> {
    let mut tokens = input.split_whitespace();
    let Some(name) = tokens.next() else {
        return Err(CommandError::Empty);
    };

    let args = parse_numbers(tokens)?;

    match name.to_ascii_uppercase().as_str() {
        "LINE" => match args[..] {
            [x1, y1, x2, y2] => Ok(SketchCommand::Draw(SketchShape::Line { x1, y1, x2, y2 })),
            _ => Err(CommandError::Usage {
                usage: "LINE x1 y1 x2 y2",
            }),
        },
        "CIRCLE" => match args[..] {
            [x, y, radius] => Ok(SketchCommand::Draw(SketchShape::Circle { x, y, radius })),
            _ => Err(CommandError::Usage {
                usage: "CIRCLE x y radius",
            }),
        },
        "RECTANGLE" => match args[..] {
            [x, y, width, height] => Ok(SketchCommand::Draw(SketchShape::Rectangle {
                x,
                y,
                width,
                height,
            })),
            _ => Err(CommandError::Usage {
                usage: "RECTANGLE x y width height",
            }),
        },
        "ARC" => match args[..] {
            [x, y, radius, start_deg, end_deg] => Ok(SketchCommand::Draw(SketchShape::Arc {
                x,
                y,
                radius,
                start_angle: start_deg.to_radians(),
                end_angle: end_deg.to_radians(),
            })),
            _ => Err(CommandError::Usage {
                usage: "ARC x y radius startAngle endAngle",
            }),
        },
        "EXTRUDE" => match args[..] {
            [height] => Ok(SketchCommand::Extrude { height }),
            _ => Err(CommandError::Usage {
                usage: "EXTRUDE height",
            }),
        },
        _ => Err(CommandError::UnknownCommand {
            name: name.to_string(),
        }),
    }
}

fn parse_numbers<'a>(tokens: impl Iterator<Item = &'a str>) -> Result<Vec<f64>, CommandError> {
    tokens
        .map(|token| {
            token.parse::<f64>().map_err(|_| CommandError::InvalidNumber {
                token: token.to_string(),
            })
        })
        .collect()
}
