use crate::app::App;
use crate::engine::PuzzleEngine;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    style::{Print, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use std::io;

const GRID_WIDTH: u16 = 37; // 9 cells * 4 + closing border
const GRID_HEIGHT: u16 = 19; // 9 cell rows + 10 separator rows

pub fn render<E: PuzzleEngine>(stdout: &mut io::Stdout, app: &App<E>) -> io::Result<()> {
    let (term_width, term_height) = terminal::size()?;

    execute!(stdout, Hide, Clear(ClearType::All))?;

    let start_x = if term_width > GRID_WIDTH {
        (term_width - GRID_WIDTH) / 2
    } else {
        1
    };
    let start_y = if term_height > GRID_HEIGHT + 4 { 2 } else { 0 };

    render_grid(stdout, app, start_x, start_y)?;
    render_status(stdout, app, start_x, start_y + GRID_HEIGHT + 1)?;
    render_controls(stdout, app, start_x, start_y + GRID_HEIGHT + 2)?;

    execute!(stdout, Show)?;
    Ok(())
}

fn render_grid<E: PuzzleEngine>(
    stdout: &mut io::Stdout,
    app: &App<E>,
    x: u16,
    y: u16,
) -> io::Result<()> {
    let theme = app.theme();

    execute!(stdout, SetBackgroundColor(theme.bg))?;

    for row in 0..9u16 {
        // Separator above this cell row: thick at box boundaries
        let sep = if row % 3 == 0 {
            "+===+===+===+===+===+===+===+===+===+"
        } else {
            "+---+---+---+---+---+---+---+---+---+"
        };
        let sep_color = if row % 3 == 0 {
            theme.box_border
        } else {
            theme.border
        };
        execute!(
            stdout,
            MoveTo(x, y + row * 2),
            SetForegroundColor(sep_color),
            Print(sep)
        )?;

        let cell_y = y + row * 2 + 1;
        execute!(stdout, MoveTo(x, cell_y))?;

        for col in 0..9u16 {
            let border_color = if col % 3 == 0 {
                theme.box_border
            } else {
                theme.border
            };
            execute!(stdout, SetForegroundColor(border_color), Print("|"))?;

            let index = row as usize * 9 + col as usize + 1;
            render_cell(stdout, app, index)?;
        }
        execute!(stdout, SetForegroundColor(theme.box_border), Print("|"))?;
    }

    // Bottom border
    execute!(
        stdout,
        MoveTo(x, y + 18),
        SetForegroundColor(theme.box_border),
        Print("+===+===+===+===+===+===+===+===+===+")
    )?;

    Ok(())
}

fn render_cell<E: PuzzleEngine>(
    stdout: &mut io::Stdout,
    app: &App<E>,
    index: usize,
) -> io::Result<()> {
    let theme = app.theme();
    let cell = app
        .board()
        .cell(index)
        .map_err(io::Error::other)?;

    let bg = if index == app.cursor() {
        theme.selected_bg
    } else {
        theme.bg
    };

    // A recorded hint only shows through when the cell has no value.
    let (text, fg) = match (cell.value(), cell.hint()) {
        (Some(v), _) => (v.to_string(), theme.filled),
        (None, Some(h)) => (h.to_string(), theme.hint),
        (None, None) => (" ".to_string(), theme.fg),
    };

    execute!(
        stdout,
        SetBackgroundColor(bg),
        SetForegroundColor(fg),
        Print(format!(" {} ", text)),
        SetBackgroundColor(theme.bg)
    )?;

    Ok(())
}

fn render_status<E: PuzzleEngine>(
    stdout: &mut io::Stdout,
    app: &App<E>,
    x: u16,
    y: u16,
) -> io::Result<()> {
    let theme = app.theme();
    if let Some(status) = app.status() {
        execute!(
            stdout,
            MoveTo(x, y),
            SetForegroundColor(theme.info),
            Print(status)
        )?;
    }
    Ok(())
}

fn render_controls<E: PuzzleEngine>(
    stdout: &mut io::Stdout,
    app: &App<E>,
    x: u16,
    y: u16,
) -> io::Result<()> {
    let theme = app.theme();
    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(theme.key),
        Print("arrows"),
        SetForegroundColor(theme.info),
        Print(" move  "),
        SetForegroundColor(theme.key),
        Print("1-9"),
        SetForegroundColor(theme.info),
        Print(" set  "),
        SetForegroundColor(theme.key),
        Print("0"),
        SetForegroundColor(theme.info),
        Print(" clear  "),
        SetForegroundColor(theme.key),
        Print("s"),
        SetForegroundColor(theme.info),
        Print(" solve  "),
        SetForegroundColor(theme.key),
        Print("n"),
        SetForegroundColor(theme.info),
        Print(" new  "),
        SetForegroundColor(theme.key),
        Print("b/i"),
        SetForegroundColor(theme.info),
        Print(" bench  "),
        SetForegroundColor(theme.key),
        Print("q"),
        SetForegroundColor(theme.info),
        Print(" quit")
    )?;
    Ok(())
}
