use std::{
    io::{stdout, Write},
    sync::{
        atomic::{AtomicBool, AtomicU64, Ordering},
        mpsc,
    },
    thread,
    time::Duration,
};

use crossterm::{
    cursor::{Hide, RestorePosition, SavePosition, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{
        self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
        SetTitle,
    },
};

use crate::board::Board;
use crate::rule::Rule;

type Err = Box<dyn std::error::Error>;
type Result<T> = std::result::Result<T, Err>;

// Tick intervals reachable with j/k, in ms.
static DELAYS: [u64; 10] = [10, 20, 40, 60, 100, 150, 200, 300, 450, 800];

#[derive(PartialEq, PartialOrd, Clone, Copy)]
pub struct Rect {
    w: u16, // j
    h: u16, // i
}

impl Rect {
    #[inline]
    pub fn term_size() -> Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Rect { w: width, h: height })
    }

    #[inline]
    pub fn w(&self) -> u16 {
        self.w
    }

    #[inline]
    pub fn h(&self) -> u16 {
        self.h
    }
}

pub struct App {
    board: Board,
    rule: Rule,
    should_exit: AtomicBool,
    pause: AtomicBool,
    tick_ms: AtomicU64,
}

impl App {
    #[inline]
    pub fn new(board: Board, rule: Rule, tick_ms: u64) -> Self {
        App {
            board,
            rule,
            should_exit: false.into(),
            pause: false.into(),
            tick_ms: tick_ms.into(),
        }
    }

    #[inline]
    pub fn should_exit(&self) -> bool {
        self.should_exit.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn pause(&self) -> bool {
        self.pause.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn tick_ms(&self) -> u64 {
        self.tick_ms.load(Ordering::Relaxed)
    }
}

pub fn run(a: App) -> Result<()> {
    runup()?;
    let d = animate(a);
    shutdown()?;
    d
}

fn runup() -> Result<()> {
    execute!(std::io::stderr(), EnterAlternateScreen, SetTitle("rulegen"), Hide)?;
    enable_raw_mode()?;
    clear()?;
    execute!(stdout(), SavePosition)?;
    Ok(())
}

fn shutdown() -> Result<()> {
    execute!(std::io::stderr(), LeaveAlternateScreen, Show)?;
    disable_raw_mode()?;
    Ok(())
}

fn animate(mut a: App) -> Result<()> {
    let (tx, rx) = mpsc::channel();

    let _ = thread::Builder::new().name("Keyboard input".into()).spawn(move || loop {
        if let Ok(true) = event::poll(Duration::from_millis(150)) {
            if let Ok(Event::Key(key)) = event::read() {
                if key.kind == KeyEventKind::Press && tx.send(key).is_err() {
                    break;
                }
            }
        }
    });

    loop {
        // one non-blocking check per tick, before drawing
        if let Ok(key) = rx.try_recv() {
            hotkey(&a, key);
        }

        if a.should_exit() {
            break;
        }

        if !a.pause() {
            draw(&a.board)?;
            a.board.advance(a.rule)?;
        }

        sleep_ms(a.tick_ms());
    }
    Ok(())
}

fn draw(board: &Board) -> Result<()> {
    clear()?;
    let mut out = stdout();
    for (i, row) in board.rows().enumerate() {
        if i > 0 {
            write!(out, "\n\r")?;
        }
        for cell in row {
            if *cell {
                write!(out, "#")?;
            } else {
                write!(out, " ")?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

fn clear() -> Result<()> {
    use terminal::{Clear, ClearType};

    execute!(stdout(), Clear(ClearType::Purge))?;
    execute!(stdout(), RestorePosition)?;
    Ok(())
}

fn sleep_ms(t: u64) {
    thread::sleep(Duration::from_millis(t))
}

fn hotkey(a: &App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key.code {
            a.should_exit.store(true, Ordering::Relaxed);
        }
        return;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => a.should_exit.store(true, Ordering::Relaxed),
        KeyCode::Char('p') => {
            let p = a.pause();
            a.pause.store(!p, Ordering::Relaxed);
        }
        KeyCode::Char('j') => a.tick_ms.store(slower(a.tick_ms()), Ordering::Relaxed),
        KeyCode::Char('k') => a.tick_ms.store(faster(a.tick_ms()), Ordering::Relaxed),
        _ => {}
    }
}

fn slower(current: u64) -> u64 {
    DELAYS.iter().copied().find(|d| *d > current).unwrap_or(DELAYS[DELAYS.len() - 1])
}

fn faster(current: u64) -> u64 {
    DELAYS.iter().rev().copied().find(|d| *d < current).unwrap_or(DELAYS[0])
}
