use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block as Panel, Borders, Paragraph, Wrap},
};
use std::{
    env,
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    process,
};
use versedeck_config::Config;
use versedeck_engine::{
    Block, DeckOptions, Presentation, RevealNavigator, Slide, TextMetrics, WidgetKind,
    io, parsing::inline::plain_inline, render::HtmlRenderer,
};

/// Rows taken by the slide border and the status line.
const CHROME_ROWS: usize = 4;
/// Columns taken by the slide border and padding.
const CHROME_COLS: usize = 4;
/// Budget used by `--print` when the config does not set one.
const PRINT_BUDGET: usize = 40;

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    document: Option<PathBuf>,
    profile: Option<String>,
    print: bool,
}

impl Args {
    fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self, String> {
        let mut parsed = Args::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--print" => parsed.print = true,
                "--profile" => match args.next() {
                    Some(name) => parsed.profile = Some(name),
                    None => return Err("--profile needs a name".to_string()),
                },
                flag if flag.starts_with("--") => return Err(format!("unknown option {flag}")),
                _ if parsed.document.is_none() => parsed.document = Some(PathBuf::from(arg)),
                _ => return Err(format!("unexpected argument {arg}")),
            }
        }
        Ok(parsed)
    }
}

struct App {
    document_path: PathBuf,
    presentation: Presentation,
    metrics: TextMetrics,
    status: Option<String>,
}

impl App {
    fn new(document_path: PathBuf, text: &str, options: DeckOptions, width: usize) -> Self {
        let mut metrics = TextMetrics::new(width);
        let presentation = Presentation::load(text, options, &mut metrics);
        Self {
            document_path,
            presentation,
            metrics,
            status: None,
        }
    }

    fn navigator(&mut self) -> &mut RevealNavigator {
        self.presentation.navigator_mut()
    }

    /// Re-reads the document and rebuilds every slide. Reading position and
    /// reveal progress start over; the terminal size captured at start-up is kept.
    fn reload(&mut self) {
        match io::read_document(&self.document_path) {
            Ok(text) => {
                self.presentation.reload(&text, &mut self.metrics);
                self.status = Some("reloaded".to_string());
            }
            Err(e) => self.status = Some(format!("reload failed: {e}")),
        }
    }

    fn slide_lines(&self) -> Vec<Line<'static>> {
        let Some(slide) = self.presentation.current_slide() else {
            return vec![Line::from("This document has no slides")];
        };
        render_slide_lines(slide, self.presentation.navigator())
    }

    fn status_line(&self) -> Line<'static> {
        let nav = self.presentation.navigator();
        let mut spans = vec![Span::styled(
            nav.navigation().slide_counter(),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if let Some(label) = nav.progress_label() {
            spans.push(Span::raw(format!("  items {label}")));
        }
        if let Some(status) = &self.status {
            spans.push(Span::styled(
                format!("  {status}"),
                Style::default().fg(Color::Yellow),
            ));
        }
        spans.push(Span::styled(
            "  q: Quit | →/l ←/h: Reveal | ↓/j/Space: Step | ↑/k: Back | Home/End | r: Reload",
            Style::default().fg(Color::DarkGray),
        ));
        Line::from(spans)
    }
}

fn render_slide_lines(slide: &Slide, nav: &RevealNavigator) -> Vec<Line<'static>> {
    let mut revealed = nav
        .visible_units(slide)
        .into_iter()
        .map(|u| u.revealed)
        .collect::<Vec<_>>()
        .into_iter();

    let mut lines = vec![Line::from(Span::styled(
        plain_inline(&slide.heading.display()),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))];

    for block in &slide.blocks {
        lines.push(Line::default());
        match block {
            Block::Heading { text, .. } => lines.push(Line::from(Span::styled(
                plain_inline(text),
                Style::default().add_modifier(Modifier::BOLD),
            ))),
            Block::Paragraph { text } => lines.push(Line::from(plain_inline(text))),
            Block::List {
                ordered,
                start,
                items,
            } => {
                for (i, item) in items.iter().enumerate() {
                    // Hidden items keep their row so the layout does not jump.
                    if !revealed.next().unwrap_or(true) {
                        lines.push(Line::default());
                        continue;
                    }
                    let marker = if *ordered {
                        format!("{}. ", *start as usize + i)
                    } else {
                        "• ".to_string()
                    };
                    lines.push(Line::from(format!("{marker}{}", plain_inline(item))));
                }
            }
            Block::Blockquote { text } => {
                for line in text.split('\n') {
                    lines.push(Line::from(Span::styled(
                        format!("│ {}", plain_inline(line)),
                        Style::default().add_modifier(Modifier::ITALIC),
                    )));
                }
            }
            Block::CodeFence { text, .. } => {
                for line in text.split('\n') {
                    lines.push(Line::from(Span::styled(
                        line.to_string(),
                        Style::default().fg(Color::Green),
                    )));
                }
            }
            Block::Widget { kind, payload } => {
                let label = match kind {
                    WidgetKind::Bible => format!("📖 {payload}"),
                    WidgetKind::Video => format!("▶ video {payload}"),
                };
                lines.push(Line::from(Span::styled(
                    label,
                    Style::default().fg(Color::Yellow),
                )));
            }
        }
    }
    lines
}

fn usage(program: &str) {
    eprintln!("Usage: {program} [FILE] [--profile NAME] [--print]");
    eprintln!(
        "FILE defaults to document_path in {}",
        Config::config_path().display()
    );
}

fn read_or_exit(path: &Path) -> String {
    match io::read_document(path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: Cannot open document '{}': {e}", path.display());
            process::exit(1);
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let mut argv = env::args();
    let program = argv.next().unwrap_or_else(|| "versedeck".to_string());
    let args = match Args::parse(argv) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            usage(&program);
            process::exit(1);
        }
    };

    let mut config = match Config::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };
    if let Some(profile) = args.profile {
        config.profile = profile;
    }
    let profile = match config.active_profile() {
        Ok(profile) => profile,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let Some(document_path) = args.document.or(config.document_path.clone()) else {
        eprintln!("Error: No document provided and no document_path configured");
        usage(&program);
        process::exit(1);
    };
    let text = read_or_exit(&document_path);

    let options = |budget: usize| {
        DeckOptions::new(budget)
            .with_limits(profile.into())
            .with_title_only_slides(config.title_only_slides)
    };

    if args.print {
        let budget = config.size_budget.unwrap_or(PRINT_BUDGET);
        let presentation = Presentation::load(&text, options(budget), &mut TextMetrics::default());
        let renderer = HtmlRenderer::default();
        for slide in presentation.deck().slides() {
            println!("{}", renderer.render_slide(slide, None));
        }
        return Ok(());
    }

    // Pagination is fixed to the terminal size at start-up
    let (cols, rows) = terminal::size()?;
    let budget = config
        .size_budget
        .unwrap_or_else(|| (rows as usize).saturating_sub(CHROME_ROWS));
    let width = (cols as usize).saturating_sub(CHROME_COLS);
    let mut app = App::new(document_path, &text, options(budget), width);
    log::debug!(
        "paginated into {} slides at {width}x{budget}",
        app.presentation.deck().len()
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            app.status = None;
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Right | KeyCode::Char('l') => {
                    app.navigator().advance_reveal();
                }
                KeyCode::Left | KeyCode::Char('h') => {
                    app.navigator().retreat_reveal();
                }
                KeyCode::Down | KeyCode::Char('j') | KeyCode::Char(' ') => {
                    app.navigator().step_forward();
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    app.navigator().step_back();
                }
                KeyCode::Home => {
                    app.navigator().first_slide();
                }
                KeyCode::End => {
                    app.navigator().last_slide();
                }
                KeyCode::Char('r') => app.reload(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let title = app
        .document_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let slide = Paragraph::new(app.slide_lines())
        .block(Panel::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false });
    f.render_widget(slide, chunks[0]);

    let status = Paragraph::new(vec![app.status_line()]);
    f.render_widget(status, chunks[1]);
}
