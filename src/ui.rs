//! Terminal rendering of the convolution animation.
//!
//! All numeric work happens in the [animation](crate::animation) module; the
//! draw functions here only turn a precomputed [FrameState] into charts. One
//! frame is drawn per tick on the thread that owns the terminal, and the
//! animation wraps back to frame 0 after the last frame, repeating until the
//! user quits.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use log::debug;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::prelude::*;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph};
use ratatui::Terminal;

use crate::animation::{Animation, FrameState, OVERLAY_SCALE};
use crate::error::DemoError;

// Matches the axis limits of the original figure.
const SIGNAL_Y_BOUNDS: [f64; 2] = [-0.2, 1.5];
const WINDOW_BAND_Y: f64 = -0.1;

/// Run the animation in the terminal, repeating indefinitely until the user
/// quits with `q` or `Esc`. `r` replays from frame 0.
pub fn run(animation: &Animation, interval: Duration) -> Result<(), DemoError> {
    enable_raw_mode().map_err(|e| DemoError::IOError(e.to_string()))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| DemoError::IOError(e.to_string()))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| DemoError::IOError(e.to_string()))?;

    let result = run_loop(&mut terminal, animation, interval);

    // Restore the terminal before surfacing any error.
    disable_raw_mode().map_err(|e| DemoError::IOError(e.to_string()))?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .map_err(|e| DemoError::IOError(e.to_string()))?;
    terminal
        .show_cursor()
        .map_err(|e| DemoError::IOError(e.to_string()))?;

    result
}

fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    animation: &Animation,
    interval: Duration,
) -> Result<(), DemoError> {
    let mut pos = 0;
    let mut last_tick = Instant::now();

    loop {
        let frame = animation.frame(pos);
        terminal
            .draw(|f| draw(f, animation, &frame))
            .map_err(|e| DemoError::IOError(e.to_string()))?;

        let timeout = interval.saturating_sub(last_tick.elapsed());
        if event::poll(timeout).map_err(|e| DemoError::IOError(e.to_string()))? {
            if let Event::Key(key) = event::read().map_err(|e| DemoError::IOError(e.to_string()))?
            {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Char('r') => {
                            debug!("replay from frame 0");
                            pos = 0;
                            last_tick = Instant::now();
                        }
                        _ => {}
                    }
                }
            }
        }

        if last_tick.elapsed() >= interval {
            // The animation repeats: wrap back to frame 0 after the last frame.
            pos = (pos + 1) % animation.num_frames();
            last_tick = Instant::now();
        }
    }
}

fn draw(f: &mut Frame, animation: &Animation, frame: &FrameState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_signal(f, rows[0], animation, frame);
    draw_kernel(f, rows[1], animation);
    draw_output(f, rows[2], animation, frame);
    draw_keys(f, rows[3], frame);
}

// Panel 1: the spike train with the positioned kernel overlay and the
// sliding-window highlight.
fn draw_signal(f: &mut Frame, area: Rect, animation: &Animation, frame: &FrameState) {
    let num = animation.signal().len() as f64;

    let signal_data = to_points(animation.signal().samples());
    let overlay_data: Vec<(f64, f64)> = frame
        .positioned_kernel
        .iter()
        .enumerate()
        .map(|(i, &w)| (i as f64, w * OVERLAY_SCALE))
        .collect();
    let window_data = window_band(frame);

    let datasets = vec![
        Dataset::default()
            .name("Spikes")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Blue))
            .data(&signal_data),
        Dataset::default()
            .name("Kernel (positioned)")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Red))
            .data(&overlay_data),
        Dataset::default()
            .name("Window")
            .marker(symbols::Marker::Block)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Yellow))
            .data(&window_data),
    ];

    let title = format!(
        " Convolution with {} Kernel | Neural Spikes (Input Signal) ",
        animation.kernel().kind().label()
    );

    let chart = Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL).title(title))
        .x_axis(
            Axis::default()
                .bounds([0.0, num])
                .labels(vec![Line::from("0"), Line::from(format!("{}", num as usize))]),
        )
        .y_axis(
            Axis::default()
                .title("Spike Amplitude".dark_gray())
                .bounds(SIGNAL_Y_BOUNDS)
                .labels(vec![
                    Line::from(format!("{:.1}", SIGNAL_Y_BOUNDS[0])),
                    Line::from(format!("{:.1}", SIGNAL_Y_BOUNDS[1])),
                ]),
        );

    f.render_widget(chart, area);
}

// Panel 2: the kernel itself, static, on zoomed axes.
fn draw_kernel(f: &mut Frame, area: Rect, animation: &Animation) {
    let kernel = animation.kernel();
    let kernel_data = to_points(kernel.weights());
    let y_max = kernel
        .weights()
        .iter()
        .fold(f64::MIN, |acc, &w| acc.max(w))
        * 1.3;

    let datasets = vec![Dataset::default()
        .name("Weight")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Red))
        .data(&kernel_data)];

    let chart = Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL).title(" Kernel (Original) "))
        .x_axis(
            Axis::default()
                .bounds([-2.0, kernel.len() as f64 + 2.0])
                .labels(vec![
                    Line::from("-2"),
                    Line::from(format!("{}", kernel.len() + 2)),
                ]),
        )
        .y_axis(
            Axis::default()
                .title("Weight".dark_gray())
                .bounds([0.0, y_max])
                .labels(vec![Line::from("0"), Line::from(format!("{:.2}", y_max))]),
        );

    f.render_widget(chart, area);
}

// Panel 3: the convolution output building up, with the current point marked.
fn draw_output(f: &mut Frame, area: Rect, animation: &Animation, frame: &FrameState) {
    let convolution = animation.convolution();
    let (y_min, y_max) = output_bounds(convolution);

    let revealed_data = to_points(&convolution[..frame.revealed]);
    let current_data = vec![(frame.pos as f64, frame.current)];

    let datasets = vec![
        Dataset::default()
            .name("Convolution Result")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Green))
            .data(&revealed_data),
        Dataset::default()
            .name(format!("Current Output {:.3}", frame.current))
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::Red))
            .data(&current_data),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Convolution Output (Building Up) "),
        )
        .x_axis(
            Axis::default()
                .title("Sample Index".dark_gray())
                .bounds([0.0, convolution.len() as f64])
                .labels(vec![
                    Line::from("0"),
                    Line::from(format!("{}", convolution.len())),
                ]),
        )
        .y_axis(
            Axis::default()
                .title("Amplitude".dark_gray())
                .bounds([y_min, y_max])
                .labels(vec![
                    Line::from(format!("{:.2}", y_min)),
                    Line::from(format!("{:.2}", y_max)),
                ]),
        );

    f.render_widget(chart, area);
}

fn draw_keys(f: &mut Frame, area: Rect, frame: &FrameState) {
    let bar = Paragraph::new(format!(
        " q: quit  r: replay  |  frame {:>3}  window [{}, {}) ",
        frame.pos, frame.window_start, frame.window_end
    ))
    .style(Style::default().bg(Color::DarkGray).fg(Color::White));
    f.render_widget(bar, area);
}

fn to_points(values: &[f64]) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| (i as f64, v))
        .collect()
}

// A flat band at the bottom of the signal panel marking the sliding window.
// The right edge is not clamped (see the animation module notes).
fn window_band(frame: &FrameState) -> Vec<(f64, f64)> {
    (frame.window_start..frame.window_end)
        .map(|i| (i as f64, WINDOW_BAND_Y))
        .collect()
}

// Axis bounds of the output panel, padded as in the original figure.
fn output_bounds(convolution: &[f64]) -> (f64, f64) {
    use itertools::MinMaxResult;
    match itertools::Itertools::minmax(convolution.iter().copied()) {
        MinMaxResult::NoElements => (-0.1, 0.1),
        MinMaxResult::OneElement(v) => (v - 0.1, v + 0.1),
        MinMaxResult::MinMax(min, max) => (min - 0.1, max + 0.1),
    }
}
