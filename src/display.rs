use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_engine::{Cell, Grid};

// labels wrap after 9 so wide boards stay aligned
fn column_labels(width: usize) -> String {
    (1..=width).map(|x| (b'0' + (x % 10) as u8) as char).collect()
}

/// Draws the grid with 1-based column labels above it
pub fn draw(grid: &Grid) -> Result<()> {
    let mut stdout = stdout();

    stdout.queue(PrintStyledContent(style(column_labels(grid.width()) + "\n")))?;

    for row in grid.rows() {
        for cell in row {
            stdout.queue(PrintStyledContent(
                style("O")
                    .attribute(Attribute::Bold)
                    .on(Color::DarkBlue)
                    .with(match cell {
                        Cell::PlayerOne => Color::Red,
                        Cell::PlayerTwo => Color::Yellow,
                        Cell::Empty => Color::DarkBlue,
                    }),
            ))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    Ok(())
}
