use anyhow::Result;
use clap::ValueEnum;
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_minimax::{board::Board, Cell, HEIGHT, WIDTH};

/// The piece colour the human plays with, the computer gets the other one
#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
pub enum Colour {
    Red,
    Yellow,
}

impl Colour {
    fn color(self) -> Color {
        match self {
            Colour::Red => Color::Red,
            Colour::Yellow => Color::Yellow,
        }
    }

    fn other(self) -> Self {
        match self {
            Colour::Red => Colour::Yellow,
            Colour::Yellow => Colour::Red,
        }
    }
}

/// Draws the board below the cursor, with 1-indexed column numbers on top
pub fn draw(board: &Board, player_colour: Colour) -> Result<()> {
    let mut stdout = stdout();

    let cols: String = (1..=WIDTH).map(|x| x.to_string()).collect();
    stdout.queue(PrintStyledContent(style(cols + "\n")))?;
    for _ in 0..HEIGHT {
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;

    let (origin_x, origin_y) = crossterm::cursor::position()?;

    for row in 0..HEIGHT {
        for column in 0..WIDTH {
            let (pos_x, pos_y) = (origin_x + column as u16, origin_y - row as u16);

            stdout
                .queue(MoveTo(pos_x, pos_y))?
                .queue(PrintStyledContent(
                    style("O")
                        .attribute(Attribute::Bold)
                        .on(Color::DarkBlue)
                        .with(match board.get(row, column) {
                            Cell::Player => player_colour.color(),
                            Cell::Bot => player_colour.other().color(),
                            Cell::Empty => Color::DarkBlue,
                        }),
                ))?;
        }
    }
    stdout
        .queue(MoveTo(origin_x + WIDTH as u16, origin_y))?
        .queue(PrintStyledContent(style("\n")))?;
    stdout.flush()?;
    Ok(())
}
