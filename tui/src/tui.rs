//! The terminal viewer.
//!
//! Draws the world's grid snapshot with the chosen [`Style`] and advances
//! the world on a timer cadence.

use crate::{args::Args, style::Style};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEventKind},
    execute, queue,
    style::{Print, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use rlifesim_lib::{State, World2, World3};
use std::{
    error::Error,
    io::{self, Stdout, Write},
    time::{Duration, Instant},
};

/// A world of either dimensionality behind one interface for the viewer.
enum GridWorld {
    D2(World2),
    D3(World3),
}

impl GridWorld {
    fn update(&mut self) {
        match self {
            GridWorld::D2(world) => world.update(),
            GridWorld::D3(world) => world.update(),
        }
    }

    fn side(&self) -> usize {
        match self {
            GridWorld::D2(world) => world.side(),
            GridWorld::D3(world) => world.side(),
        }
    }

    fn generation(&self) -> u64 {
        match self {
            GridWorld::D2(world) => world.generation(),
            GridWorld::D3(world) => world.generation(),
        }
    }

    fn population(&self) -> usize {
        match self {
            GridWorld::D2(world) => world.population(),
            GridWorld::D3(world) => world.population(),
        }
    }

    /// Number of drawable layers: one for a square world, the side length
    /// for a cubic one.
    fn layers(&self) -> usize {
        match self {
            GridWorld::D2(_) => 1,
            GridWorld::D3(world) => world.side(),
        }
    }

    fn cell(&self, layer: usize, row: usize, col: usize) -> State {
        match self {
            GridWorld::D2(world) => world.get([row, col]),
            GridWorld::D3(world) => world.get([layer, row, col]),
        }
    }

    fn plaintext(&self, layer: usize) -> String {
        match self {
            GridWorld::D2(world) => world.plaintext(),
            GridWorld::D3(world) => world.plaintext_layer(layer),
        }
    }
}

struct Viewer {
    world: GridWorld,
    style: Style,
    every: Duration,
    paused: bool,
    layer: usize,
    stdout: Stdout,
}

impl Viewer {
    fn new(world: GridWorld, style: Style, every: Duration) -> Result<Self, io::Error> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, Hide)?;
        Ok(Viewer {
            world,
            style,
            every,
            paused: false,
            layer: 0,
            stdout,
        })
    }

    fn run(&mut self) -> Result<(), Box<dyn Error>> {
        self.draw()?;
        let mut deadline = Instant::now() + self.every;
        loop {
            let timeout = if self.paused {
                Duration::from_millis(250)
            } else {
                deadline.saturating_duration_since(Instant::now())
            };
            if event::poll(timeout)? {
                let key = match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => key,
                    Event::Resize(..) => {
                        self.draw()?;
                        continue;
                    }
                    _ => continue,
                };
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char(' ') | KeyCode::Enter => {
                        self.paused = !self.paused;
                        if !self.paused {
                            deadline = Instant::now() + self.every;
                        }
                        self.draw()?;
                    }
                    KeyCode::Right => {
                        self.world.update();
                        self.draw()?;
                    }
                    KeyCode::Char('[') => {
                        self.layer = self.layer.saturating_sub(1);
                        self.draw()?;
                    }
                    KeyCode::Char(']') => {
                        if self.layer + 1 < self.world.layers() {
                            self.layer += 1;
                        }
                        self.draw()?;
                    }
                    _ => (),
                }
            } else if !self.paused {
                self.world.update();
                self.draw()?;
                deadline = Instant::now() + self.every;
            }
        }
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let side = self.world.side();
        queue!(self.stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        let mut top = format!(
            "Gen: {}  Cells: {}",
            self.world.generation(),
            self.world.population()
        );
        if self.world.layers() > 1 {
            top.push_str(&format!("  Layer: {}/{}", self.layer, side - 1));
        }
        queue!(self.stdout, Print(top))?;
        for row in 0..side {
            queue!(self.stdout, MoveTo(0, row as u16 + 1))?;
            for col in 0..side {
                let state = self.world.cell(self.layer, row, col);
                queue!(
                    self.stdout,
                    SetForegroundColor(self.style.color(state, row, col)),
                    Print(self.style.glyph(state))
                )?;
            }
        }
        let help = if self.paused {
            "Paused. Press [space] to resume, [→] to step, [q] to quit."
        } else {
            "Running. Press [space] to pause, [q] to quit."
        };
        queue!(
            self.stdout,
            ResetColor,
            MoveTo(0, side as u16 + 1),
            Print(help)
        )?;
        if self.world.layers() > 1 {
            queue!(self.stdout, Print(" Press [ and ] to change layer."))?;
        }
        self.stdout.flush()
    }

    fn close(&mut self) -> Result<(), io::Error> {
        execute!(self.stdout, Show, LeaveAlternateScreen)?;
        terminal::disable_raw_mode()
    }
}

/// Runs the interactive viewer until the user quits, then prints the last
/// generation.
pub(crate) fn view(args: Args) -> Result<(), Box<dyn Error>> {
    let world = if args.three_d {
        GridWorld::D3(args.config.world()?)
    } else {
        GridWorld::D2(args.config.world()?)
    };
    let mut viewer = Viewer::new(world, args.style, args.every)?;
    let result = viewer.run();
    viewer.close()?;
    if result.is_ok() {
        print!("{}", viewer.world.plaintext(viewer.layer));
    }
    result
}
