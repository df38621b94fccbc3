//! Live bid/ask chart using ratatui.

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use quotewatch_core::types::Quote;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// TUI chart redrawing the buffered quotes on a fixed refresh interval.
pub struct ChartDashboard {
    refresh_ms: u64,
}

impl ChartDashboard {
    /// Create a new dashboard.
    pub fn new(refresh_ms: u64) -> Self {
        Self { refresh_ms }
    }

    /// Run the dashboard until 'q' or Esc is pressed.
    pub fn run<F>(&self, mut get_snapshot: F) -> io::Result<()>
    where
        F: FnMut() -> Vec<Quote>,
    {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let res = self.run_loop(&mut terminal, &mut get_snapshot);

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        res
    }

    fn run_loop<F>(
        &self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        get_snapshot: &mut F,
    ) -> io::Result<()>
    where
        F: FnMut() -> Vec<Quote>,
    {
        loop {
            let snapshot = get_snapshot();
            terminal.draw(|f| draw_chart(f, &snapshot))?;

            if event::poll(Duration::from_millis(self.refresh_ms))? {
                if let Event::Key(key) = event::read()? {
                    if key.code == KeyCode::Char('q') || key.code == KeyCode::Esc {
                        return Ok(());
                    }
                }
            }
        }
    }
}

/// Draw one frame: a header with the latest observation plus a bid/ask
/// line chart over time. Tolerates empty and sparse snapshots.
pub(crate) fn draw_chart(frame: &mut Frame, snapshot: &[Quote]) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Chart
        ])
        .split(frame.area());

    render_header(frame, chunks[0], snapshot);
    render_prices(frame, chunks[1], snapshot);
}

fn render_header(frame: &mut Frame, area: Rect, snapshot: &[Quote]) {
    let line = match snapshot.last() {
        Some(quote) => Line::from(vec![
            Span::styled(
                quote.symbol.clone(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                "  bid {:.2}  ask {:.2}  spread {:.2}",
                quote.bid,
                quote.ask,
                quote.spread()
            )),
            Span::raw(format!("  |  {} rows", snapshot.len())),
            Span::raw("  |  Press 'q' to quit"),
        ]),
        None => Line::from("Waiting for first quote... | Press 'q' to quit"),
    };

    let header =
        Paragraph::new(vec![line]).block(Block::default().borders(Borders::ALL).title("Quotes"));
    frame.render_widget(header, area);
}

fn render_prices(frame: &mut Frame, area: Rect, snapshot: &[Quote]) {
    let Some(first) = snapshot.first() else {
        let placeholder = Paragraph::new("No data yet")
            .block(Block::default().borders(Borders::ALL).title("Prices"));
        frame.render_widget(placeholder, area);
        return;
    };

    // X axis is seconds since the first buffered row; failed ticks show
    // up as gaps in the series.
    let elapsed = |q: &Quote| (q.timestamp - first.timestamp).num_milliseconds() as f64 / 1000.0;
    let bid_points: Vec<(f64, f64)> = snapshot.iter().map(|q| (elapsed(q), q.bid)).collect();
    let ask_points: Vec<(f64, f64)> = snapshot.iter().map(|q| (elapsed(q), q.ask)).collect();

    let x_max = bid_points.last().map(|(x, _)| *x).unwrap_or(0.0).max(1.0);
    let y_min = bid_points.iter().map(|(_, y)| *y).fold(f64::MAX, f64::min);
    let y_max = ask_points.iter().map(|(_, y)| *y).fold(f64::MIN, f64::max);
    let pad = ((y_max - y_min) * 0.1).max(0.05);

    let datasets = vec![
        Dataset::default()
            .name("bid")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Green))
            .data(&bid_points),
        Dataset::default()
            .name("ask")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Red))
            .data(&ask_points),
    ];

    let last = snapshot.last().unwrap_or(first);
    let chart = Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL).title("Prices"))
        .x_axis(
            Axis::default()
                .title("time")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, x_max])
                .labels(vec![
                    first.timestamp.format("%H:%M:%S").to_string(),
                    last.timestamp.format("%H:%M:%S").to_string(),
                ]),
        )
        .y_axis(
            Axis::default()
                .title("price")
                .style(Style::default().fg(Color::Gray))
                .bounds([y_min - pad, y_max + pad])
                .labels(vec![
                    format!("{:.2}", y_min - pad),
                    format!("{:.2}", y_max + pad),
                ]),
        );

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use ratatui::backend::TestBackend;

    fn quote(secs: i64, bid: f64) -> Quote {
        Quote::new(
            "GOOG",
            Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap(),
            bid,
            bid + 0.10,
        )
    }

    fn draw(snapshot: &[Quote]) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw_chart(f, snapshot)).unwrap();
        terminal
    }

    #[test]
    fn test_draw_chart_with_empty_snapshot() {
        let terminal = draw(&[]);
        let rendered = format!("{:?}", terminal.backend().buffer());
        assert!(rendered.contains("Waiting for first quote"));
    }

    #[test]
    fn test_draw_chart_with_quotes() {
        let snapshot = vec![quote(0, 100.0), quote(5, 100.5), quote(15, 100.2)];
        let terminal = draw(&snapshot);
        let rendered = format!("{:?}", terminal.backend().buffer());
        assert!(rendered.contains("GOOG"));
        assert!(rendered.contains("Prices"));
    }

    #[test]
    fn test_draw_chart_with_single_quote() {
        // A single row must not collapse the axis bounds.
        let terminal = draw(&[quote(0, 100.0)]);
        let rendered = format!("{:?}", terminal.backend().buffer());
        assert!(rendered.contains("GOOG"));
    }
}
