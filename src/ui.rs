use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use dtindex::{
    year_distributions, Dataset, DatasetSummary, LookupOutcome, QueryService, TableKind,
    YearDistribution,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame, Terminal,
};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Lookup,
    Overview,
    Data,
}

impl Page {
    pub fn next(&self) -> Self {
        match self {
            Page::Lookup => Page::Overview,
            Page::Overview => Page::Data,
            Page::Data => Page::Lookup,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Page::Lookup => Page::Data,
            Page::Overview => Page::Lookup,
            Page::Data => Page::Overview,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Page::Lookup => "Lookup",
            Page::Overview => "Overview",
            Page::Data => "Data",
        }
    }
}

pub struct App {
    pub dataset: Dataset,
    pub years: Vec<i32>,
    pub summary: DatasetSummary,
    pub distributions: Vec<YearDistribution>,
    pub current_page: Page,
    pub code_input: String,
    pub year_idx: usize,
    pub last_lookup: Option<LookupOutcome>,
    pub show_distribution: bool,
    pub table_kind: TableKind,
    pub table_state: TableState,
}

impl App {
    pub fn new(dataset: Dataset) -> Self {
        let service = QueryService::new(&dataset);
        let years = service.years();
        let summary = service.summarize();
        let distributions = year_distributions(&dataset);

        let mut table_state = TableState::default();
        if !dataset.index_records().is_empty() {
            table_state.select(Some(0));
        }

        Self {
            dataset,
            years,
            summary,
            distributions,
            current_page: Page::Lookup,
            code_input: String::new(),
            year_idx: 0,
            last_lookup: None,
            show_distribution: false,
            table_kind: TableKind::DigitalIndex,
            table_state,
        }
    }

    pub fn next_page(&mut self) {
        self.current_page = self.current_page.next();
    }

    pub fn previous_page(&mut self) {
        self.current_page = self.current_page.previous();
    }

    /// Year currently selected in the closed menu. None only when the
    /// dataset has no years at all.
    pub fn selected_year(&self) -> Option<i32> {
        self.years.get(self.year_idx).copied()
    }

    pub fn next_year(&mut self) {
        if !self.years.is_empty() && self.year_idx + 1 < self.years.len() {
            self.year_idx += 1;
        }
    }

    pub fn previous_year(&mut self) {
        if self.year_idx > 0 {
            self.year_idx -= 1;
        }
    }

    pub fn push_input(&mut self, c: char) {
        self.code_input.push(c);
    }

    pub fn backspace_input(&mut self) {
        self.code_input.pop();
    }

    /// Run the lookup for the current form state and remember the outcome
    /// for the result panel.
    pub fn run_lookup(&mut self) {
        let year = match self.selected_year() {
            Some(year) => year,
            None => return,
        };

        let outcome = QueryService::new(&self.dataset).lookup(&self.code_input, year);
        self.last_lookup = Some(outcome);
    }

    pub fn toggle_distribution(&mut self) {
        self.show_distribution = !self.show_distribution;
    }

    pub fn switch_table(&mut self) {
        self.table_kind = self.table_kind.other();
        let len = self.dataset.row_count(self.table_kind);
        self.table_state
            .select(if len == 0 { None } else { Some(0) });
    }

    fn table_len(&self) -> usize {
        self.dataset.row_count(self.table_kind)
    }

    pub fn next_row(&mut self) {
        let len = self.table_len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub fn previous_row(&mut self) {
        let len = self.table_len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub fn page_down(&mut self) {
        let len = self.table_len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                let next = i + 20;
                if next >= len {
                    len - 1
                } else {
                    next
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub fn page_up(&mut self) {
        let i = match self.table_state.selected() {
            Some(i) => {
                if i < 20 {
                    0
                } else {
                    i - 20
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Global keys first; 'q' stays typeable in the code input.
            match key.code {
                KeyCode::Esc => return Ok(()),
                KeyCode::Tab => {
                    if key.modifiers.contains(KeyModifiers::SHIFT) {
                        app.previous_page();
                    } else {
                        app.next_page();
                    }
                    continue;
                }
                KeyCode::BackTab => {
                    app.previous_page();
                    continue;
                }
                _ => {}
            }

            match app.current_page {
                Page::Lookup => match key.code {
                    KeyCode::Char(c) => app.push_input(c),
                    KeyCode::Backspace => app.backspace_input(),
                    KeyCode::Left => app.previous_year(),
                    KeyCode::Right => app.next_year(),
                    KeyCode::Enter => app.run_lookup(),
                    _ => {}
                },
                Page::Overview => match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Char('d') => app.toggle_distribution(),
                    _ => {}
                },
                Page::Data => match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Char('t') => app.switch_table(),
                    KeyCode::Down | KeyCode::Char('j') => app.next_row(),
                    KeyCode::Up | KeyCode::Char('k') => app.previous_row(),
                    KeyCode::PageDown => app.page_down(),
                    KeyCode::PageUp => app.page_up(),
                    KeyCode::Home => app.table_state.select(Some(0)),
                    KeyCode::End => {
                        let len = app.dataset.row_count(app.table_kind);
                        if len > 0 {
                            app.table_state.select(Some(len - 1));
                        }
                    }
                    _ => {}
                },
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with navigation
            Constraint::Min(0),    // Content area
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    match app.current_page {
        Page::Lookup => render_lookup(f, chunks[1], app),
        Page::Overview => render_overview(f, chunks[1], app),
        Page::Data => render_data(f, chunks[1], app),
    }

    render_status_bar(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let pages = vec![
        (Page::Lookup, "Lookup"),
        (Page::Overview, "Overview"),
        (Page::Data, "Data"),
    ];

    let mut tab_spans = vec![];
    for (i, (page, name)) in pages.iter().enumerate() {
        if i > 0 {
            tab_spans.push(Span::raw(" │ "));
        }

        let style = if *page == app.current_page {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        tab_spans.push(Span::styled(*name, style));
    }

    tab_spans.push(Span::raw("  |  "));
    tab_spans.push(Span::styled(
        format!("Years: {}", app.summary.year_range()),
        Style::default().fg(Color::White),
    ));
    tab_spans.push(Span::raw("  |  "));
    tab_spans.push(Span::styled(
        format!("Firms: {}", app.summary.firm_count),
        Style::default().fg(Color::Green),
    ));

    let header = Paragraph::new(vec![Line::from(tab_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Digitalization Index Query "),
    );

    f.render_widget(header, area);
}

fn render_lookup(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Query form
            Constraint::Percentage(60), // Result panel
        ])
        .split(area);

    render_lookup_form(f, chunks[0], app);
    render_lookup_result(f, chunks[1], app);
}

fn render_lookup_form(f: &mut Frame, area: Rect, app: &App) {
    let year_label = match app.selected_year() {
        Some(year) => year.to_string(),
        None => "no years loaded".to_string(),
    };

    let content = vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            "  Stock code",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![
            Span::raw("  > "),
            Span::styled(
                app.code_input.as_str(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled("█", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "  Year",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![
            Span::raw("  ◀ "),
            Span::styled(
                year_label,
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ▶"),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "  Hint: ",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
            ),
            Span::styled(
                "type a code (e.g. 000921), ←/→ pick year, Enter to query",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            ),
        ]),
    ];

    let form = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Query "),
    );

    f.render_widget(form, area);
}

fn render_lookup_result(f: &mut Frame, area: Rect, app: &App) {
    let content = match &app.last_lookup {
        None => vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "  No query yet",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )]),
        ],
        Some(LookupOutcome::MissingCode) => vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "  ⚠ Please enter a stock code",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )]),
        ],
        Some(LookupOutcome::NotFound) => vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                format!(
                    "  ⚠ No record for code {} in {}",
                    app.code_input,
                    app.selected_year().map(|y| y.to_string()).unwrap_or_default()
                ),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )]),
        ],
        Some(LookupOutcome::Found(record)) => vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    "  Stock code: ",
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::raw(record.stock_code.clone()),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    "  Firm name: ",
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::raw(record.firm_name.clone()),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    "  Year: ",
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::raw(record.year.to_string()),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    "  Digitalization index (0-100): ",
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("{:.2}", record.digitalization_index),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from("  ─────────────────────────────────────"),
            Line::from(""),
            Line::from(vec![Span::styled(
                "  TERM FREQUENCIES",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("  AI: ", Style::default().fg(Color::Cyan)),
                Span::raw(record.ai_terms.to_string()),
            ]),
            Line::from(vec![
                Span::styled("  Big data: ", Style::default().fg(Color::Cyan)),
                Span::raw(record.big_data_terms.to_string()),
            ]),
            Line::from(vec![
                Span::styled("  Cloud computing: ", Style::default().fg(Color::Cyan)),
                Span::raw(record.cloud_terms.to_string()),
            ]),
            Line::from(vec![
                Span::styled("  Blockchain: ", Style::default().fg(Color::Cyan)),
                Span::raw(record.blockchain_terms.to_string()),
            ]),
            Line::from(vec![
                Span::styled("  Digital tech usage: ", Style::default().fg(Color::Cyan)),
                Span::raw(record.digital_usage_terms.to_string()),
            ]),
        ],
    };

    let result_panel = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Result "),
    );

    f.render_widget(result_panel, area);
}

fn render_overview(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(0)])
        .split(area);

    let content = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "  Data year range: ",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(app.summary.year_range()),
        ]),
        Line::from(vec![
            Span::styled(
                "  Firms covered: ",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(app.summary.firm_count.to_string()),
        ]),
        Line::from(""),
    ];

    let summary = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Dataset Overview "),
    );
    f.render_widget(summary, chunks[0]);

    if app.show_distribution {
        render_distribution_table(f, chunks[1], app);
    } else {
        let hint = Paragraph::new(vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    "  Press ",
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
                ),
                Span::styled(
                    "d",
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
                ),
                Span::styled(
                    " to show the index distribution by year",
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
                ),
            ]),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White))
                .title(" Index Distribution "),
        );
        f.render_widget(hint, chunks[1]);
    }
}

fn render_distribution_table(f: &mut Frame, area: Rect, app: &App) {
    let header_cells = ["Year", "Firms", "Min", "Q1", "Median", "Q3", "Max"]
        .iter()
        .map(|h| {
            Cell::from(*h).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        });

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let rows = app.distributions.iter().map(|d| {
        let cells = vec![
            Cell::from(d.year.to_string()),
            Cell::from(d.count.to_string()),
            Cell::from(format!("{:.2}", d.min)),
            Cell::from(format!("{:.2}", d.q1)),
            Cell::from(format!("{:.2}", d.median)).style(Style::default().fg(Color::Green)),
            Cell::from(format!("{:.2}", d.q3)),
            Cell::from(format!("{:.2}", d.max)),
        ];

        Row::new(cells).height(1)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Length(8),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Index Distribution by Year "),
    );

    f.render_widget(table, area);
}

fn render_data(f: &mut Frame, area: Rect, app: &mut App) {
    match app.table_kind {
        TableKind::DigitalIndex => render_index_table(f, area, app),
        TableKind::TechKeywords => render_keywords_table(f, area, app),
    }
}

fn render_index_table(f: &mut Frame, area: Rect, app: &mut App) {
    let header_cells = [
        "Code", "Firm", "Year", "Index", "AI", "BigData", "Cloud", "Chain", "Usage",
    ]
    .iter()
    .map(|h| {
        Cell::from(*h).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    });

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let rows = app.dataset.index_records().iter().map(|r| {
        let cells = vec![
            Cell::from(r.stock_code.clone()),
            Cell::from(truncate(&r.firm_name, 24)),
            Cell::from(r.year.to_string()),
            Cell::from(format!("{:.2}", r.digitalization_index))
                .style(Style::default().fg(Color::Green)),
            Cell::from(r.ai_terms.to_string()),
            Cell::from(r.big_data_terms.to_string()),
            Cell::from(r.cloud_terms.to_string()),
            Cell::from(r.blockchain_terms.to_string()),
            Cell::from(r.digital_usage_terms.to_string()),
        ];

        Row::new(cells).height(1)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(26),
            Constraint::Length(6),
            Constraint::Length(8),
            Constraint::Length(7),
            Constraint::Length(8),
            Constraint::Length(7),
            Constraint::Length(7),
            Constraint::Length(7),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(format!(" {} ", TableKind::DigitalIndex.title())),
    )
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.table_state);
}

fn render_keywords_table(f: &mut Frame, area: Rect, app: &mut App) {
    let header_cells = [
        "Code", "Firm", "Year", "AI", "BigData", "Cloud", "Chain", "Usage", "Total",
    ]
    .iter()
    .map(|h| {
        Cell::from(*h).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    });

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let rows = app.dataset.keyword_records().iter().map(|r| {
        let cells = vec![
            Cell::from(r.stock_code.clone()),
            Cell::from(truncate(&r.firm_name, 24)),
            Cell::from(r.year.to_string()),
            Cell::from(r.ai_terms.to_string()),
            Cell::from(r.big_data_terms.to_string()),
            Cell::from(r.cloud_terms.to_string()),
            Cell::from(r.blockchain_terms.to_string()),
            Cell::from(r.digital_usage_terms.to_string()),
            Cell::from(r.total_terms.to_string()).style(Style::default().fg(Color::Green)),
        ];

        Row::new(cells).height(1)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(26),
            Constraint::Length(6),
            Constraint::Length(7),
            Constraint::Length(8),
            Constraint::Length(7),
            Constraint::Length(7),
            Constraint::Length(7),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(format!(" {} ", TableKind::TechKeywords.title())),
    )
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.table_state);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut status_spans = vec![Span::styled(
        format!(" {} ", app.current_page.title()),
        Style::default().fg(Color::Cyan),
    )];

    match app.current_page {
        Page::Lookup => {
            status_spans.push(Span::raw("| "));
            status_spans.push(Span::styled("Enter", Style::default().fg(Color::Yellow)));
            status_spans.push(Span::raw(" Query | "));
            status_spans.push(Span::styled("←/→", Style::default().fg(Color::Yellow)));
            status_spans.push(Span::raw(" Year | "));
        }
        Page::Overview => {
            status_spans.push(Span::raw("| "));
            status_spans.push(Span::styled("d", Style::default().fg(Color::Yellow)));
            status_spans.push(Span::raw(" Distribution | "));
        }
        Page::Data => {
            let selected = app.table_state.selected().map(|i| i + 1).unwrap_or(0);
            let total = app.dataset.row_count(app.table_kind);
            status_spans.push(Span::styled(
                format!("| Row: {}/{} ", selected, total),
                Style::default().fg(Color::Green),
            ));
            status_spans.push(Span::raw("| "));
            status_spans.push(Span::styled("t", Style::default().fg(Color::Yellow)));
            status_spans.push(Span::raw(" Switch table | "));
            status_spans.push(Span::styled("↑/↓", Style::default().fg(Color::Yellow)));
            status_spans.push(Span::raw(" Nav | "));
            status_spans.push(Span::styled("PgUp/PgDn", Style::default().fg(Color::Yellow)));
            status_spans.push(Span::raw(" Fast | "));
        }
    }

    status_spans.push(Span::styled("Tab", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Page | "));
    status_spans.push(Span::styled("Esc", Style::default().fg(Color::Red)));
    status_spans.push(Span::raw(" Quit"));

    let status_bar = Paragraph::new(vec![Line::from(status_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
