use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use finance_ledger::{format_amount, Ledger, Transaction, TransactionType};
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
    Transactions,
    Months,
    Categories,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterType {
    All,
    Expenses,
    Income,
    Category(String),
}

impl FilterType {
    pub fn label(&self) -> String {
        match self {
            FilterType::All => "All".to_string(),
            FilterType::Expenses => "Expenses".to_string(),
            FilterType::Income => "Income".to_string(),
            FilterType::Category(category) => format!("Category: {}", category),
        }
    }

    pub fn matches(&self, tx: &Transaction) -> bool {
        match self {
            FilterType::All => true,
            FilterType::Expenses => tx.is_expense(),
            FilterType::Income => tx.is_income(),
            FilterType::Category(category) => tx.in_category(category),
        }
    }
}

impl Page {
    pub fn next(&self) -> Self {
        match self {
            Page::Transactions => Page::Months,
            Page::Months => Page::Categories,
            Page::Categories => Page::Transactions,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Page::Transactions => Page::Categories,
            Page::Months => Page::Transactions,
            Page::Categories => Page::Months,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Page::Transactions => "Transactions",
            Page::Months => "Months",
            Page::Categories => "Categories",
        }
    }
}

pub struct App {
    pub ledger: Ledger,
    pub filtered_transactions: Vec<Transaction>,
    /// Ledger index of each filtered row
    pub filtered_positions: Vec<usize>,
    pub state: TableState,
    pub current_page: Page,
    pub show_detail: bool,
    pub active_filter: FilterType,
    pub currency_symbol: String,
    pub streak_threshold: f64,
}

impl App {
    pub fn new(ledger: Ledger, currency_symbol: String, streak_threshold: f64) -> Self {
        let mut app = Self {
            ledger,
            filtered_transactions: Vec::new(),
            filtered_positions: Vec::new(),
            state: TableState::default(),
            current_page: Page::Transactions,
            show_detail: false,
            active_filter: FilterType::All,
            currency_symbol,
            streak_threshold,
        };
        app.apply_filter(FilterType::All);
        app
    }

    pub fn toggle_detail(&mut self) {
        self.show_detail = !self.show_detail;
    }

    pub fn selected_transaction(&self) -> Option<&Transaction> {
        self.state.selected().and_then(|i| self.filtered_transactions.get(i))
    }

    pub fn apply_filter(&mut self, filter: FilterType) {
        let transactions = self.ledger.transactions();
        self.filtered_positions = transactions
            .iter()
            .enumerate()
            .filter(|(_, tx)| filter.matches(tx))
            .map(|(i, _)| i)
            .collect();
        self.filtered_transactions = self
            .filtered_positions
            .iter()
            .map(|&i| transactions[i].clone())
            .collect();
        self.active_filter = filter;

        if self.filtered_transactions.is_empty() {
            self.state.select(None);
        } else {
            self.state.select(Some(0));
        }
    }

    /// Narrow the table to the selected transaction's category
    pub fn filter_selected_category(&mut self) {
        if let Some(category) = self.selected_transaction().map(|tx| tx.category.clone()) {
            self.apply_filter(FilterType::Category(category));
        }
    }

    /// Remove the selected transaction from the ledger and refresh the view
    pub fn delete_selected(&mut self) -> Option<Transaction> {
        let position = *self.filtered_positions.get(self.state.selected()?)?;
        let removed = self.ledger.remove_at(position);

        let previous = self.state.selected();
        self.apply_filter(self.active_filter.clone());
        if let Some(i) = previous {
            let len = self.filtered_transactions.len();
            if len > 0 {
                self.state.select(Some(i.min(len - 1)));
            }
        }

        removed
    }

    pub fn next_page(&mut self) {
        self.current_page = self.current_page.next();
    }

    pub fn previous_page(&mut self) {
        self.current_page = self.current_page.previous();
    }

    pub fn next(&mut self) {
        let len = self.filtered_transactions.len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.filtered_transactions.len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }

    fn money(&self, amount: f64) -> String {
        format_amount(amount, &self.currency_symbol)
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "terminal UI stopped");
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
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Enter => app.toggle_detail(),
                KeyCode::Tab => {
                    if key.modifiers.contains(KeyModifiers::SHIFT) {
                        app.previous_page();
                    } else {
                        app.next_page();
                    }
                }
                KeyCode::BackTab => app.previous_page(),
                KeyCode::Char('a') => app.apply_filter(FilterType::All),
                KeyCode::Char('e') => app.apply_filter(FilterType::Expenses),
                KeyCode::Char('i') => app.apply_filter(FilterType::Income),
                KeyCode::Char('c') if app.current_page == Page::Transactions => {
                    app.filter_selected_category()
                }
                KeyCode::Char('d') if app.current_page == Page::Transactions => {
                    app.delete_selected();
                }
                KeyCode::Down | KeyCode::Char('j') => app.next(),
                KeyCode::Up | KeyCode::Char('k') => app.previous(),
                KeyCode::Home if !app.filtered_transactions.is_empty() => {
                    app.state.select(Some(0))
                }
                KeyCode::End if !app.filtered_transactions.is_empty() => {
                    app.state.select(Some(app.filtered_transactions.len() - 1))
                }
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with navigation + totals
            Constraint::Min(0),    // Content area
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    if app.show_detail && app.current_page == Page::Transactions {
        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[1]);

        render_table(f, content_chunks[0], app);
        render_detail_panel(f, content_chunks[1], app);
    } else {
        match app.current_page {
            Page::Transactions => render_table(f, chunks[1], app),
            Page::Months => render_months(f, chunks[1], app),
            Page::Categories => render_categories(f, chunks[1], app),
        }
    }

    render_status_bar(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];
    for (i, page) in [Page::Transactions, Page::Months, Page::Categories]
        .iter()
        .enumerate()
    {
        if i > 0 {
            spans.push(Span::raw(" │ "));
        }
        let style = if *page == app.current_page {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(page.title().to_string(), style));
    }

    let balance = app.ledger.balance();
    let balance_color = if balance >= 0.0 { Color::Cyan } else { Color::Red };

    spans.push(Span::raw("  |  "));
    spans.push(Span::styled(
        format!("Total: {}", app.ledger.len()),
        Style::default().fg(Color::White),
    ));
    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        format!("↑ {}", app.money(app.ledger.total_income())),
        Style::default().fg(Color::Green),
    ));
    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        format!("↓ {}", app.money(app.ledger.total_expenses())),
        Style::default().fg(Color::Red),
    ));
    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        format!("= {}", app.money(balance)),
        Style::default().fg(balance_color).add_modifier(Modifier::BOLD),
    ));

    let header = Paragraph::new(vec![Line::from(spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" 💰 Personal Finance Tracker "),
    );

    f.render_widget(header, area);
}

fn header_row(titles: &[&'static str]) -> Row<'static> {
    let cells = titles.iter().map(|h| {
        Cell::from(*h).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    });
    Row::new(cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1)
}

fn type_color(kind: TransactionType) -> Color {
    match kind {
        TransactionType::Income => Color::Green,
        TransactionType::Expense => Color::Red,
    }
}

fn render_table(f: &mut Frame, area: Rect, app: &mut App) {
    let header = header_row(&["ID", "Date", "Description", "Amount", "Type", "Category"]);

    let rows: Vec<Row> = app
        .filtered_transactions
        .iter()
        .map(|tx| {
            let color = type_color(tx.transaction_type);
            Row::new(vec![
                Cell::from(tx.id.to_string()),
                Cell::from(tx.date.clone()),
                Cell::from(truncate(&tx.description, 30)),
                Cell::from(app.money(tx.amount)).style(Style::default().fg(color)),
                Cell::from(tx.transaction_type.label().to_string())
                    .style(Style::default().fg(color)),
                Cell::from(truncate(&tx.category, 20)).style(Style::default().fg(Color::Yellow)),
            ])
            .height(1)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Length(12),
            Constraint::Length(32),
            Constraint::Length(12),
            Constraint::Length(9),
            Constraint::Length(22),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(format!(" Transactions ({}) ", app.active_filter.label())),
    )
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn render_detail_panel(f: &mut Frame, area: Rect, app: &App) {
    let lines = match app.selected_transaction() {
        Some(tx) => vec![
            Line::from(vec![
                Span::styled("ID: ", Style::default().fg(Color::DarkGray)),
                Span::raw(tx.id.to_string()),
            ]),
            Line::from(vec![
                Span::styled("Date: ", Style::default().fg(Color::DarkGray)),
                Span::raw(tx.date.clone()),
            ]),
            Line::from(vec![
                Span::styled("Type: ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    tx.transaction_type.label().to_string(),
                    Style::default().fg(type_color(tx.transaction_type)),
                ),
            ]),
            Line::from(vec![
                Span::styled("Amount: ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    app.money(tx.amount),
                    Style::default().fg(type_color(tx.transaction_type)),
                ),
            ]),
            Line::from(vec![
                Span::styled("Category: ", Style::default().fg(Color::DarkGray)),
                Span::styled(tx.category.clone(), Style::default().fg(Color::Yellow)),
            ]),
            Line::from(vec![
                Span::styled("Description: ", Style::default().fg(Color::DarkGray)),
                Span::raw(tx.description.clone()),
            ]),
        ],
        None => vec![Line::from("No transaction selected")],
    };

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Detail "),
    );

    f.render_widget(panel, area);
}

fn render_months(f: &mut Frame, area: Rect, app: &App) {
    let header = header_row(&["Month", "Income", "Expenses", "Count", "Streak"]);

    let streak_months: Vec<String> = app
        .ledger
        .consecutive_expensive_months(app.streak_threshold)
        .into_iter()
        .flatten()
        .collect();

    let mut groups = app.ledger.group_by_month();
    groups.sort_keys();

    let rows: Vec<Row> = groups
        .iter()
        .map(|(month, bucket)| {
            let streak = if streak_months.contains(month) { "🔥" } else { "" };
            Row::new(vec![
                Cell::from(month.clone()),
                Cell::from(app.money(bucket.income_total())).style(Style::default().fg(Color::Green)),
                Cell::from(app.money(bucket.expense_total())).style(Style::default().fg(Color::Red)),
                Cell::from(bucket.len().to_string()),
                Cell::from(streak),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(14),
            Constraint::Length(14),
            Constraint::Length(7),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(format!(
                " Months (streak threshold {}) ",
                app.money(app.streak_threshold)
            )),
    );

    f.render_widget(table, area);
}

fn render_categories(f: &mut Frame, area: Rect, app: &App) {
    let header = header_row(&["Category", "Average expense"]);

    let rows: Vec<Row> = app
        .ledger
        .average_expense_per_category()
        .into_iter()
        .map(|(category, average)| {
            Row::new(vec![
                Cell::from(category).style(Style::default().fg(Color::Yellow)),
                Cell::from(app.money(average)).style(Style::default().fg(Color::Red)),
            ])
        })
        .collect();

    let table = Table::new(rows, [Constraint::Length(24), Constraint::Length(18)])
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White))
                .title(" Average expense per category "),
        );

    f.render_widget(table, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));

    let mut spans = vec![
        Span::styled(
            format!("{} ", app.current_page.title()),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("| "),
        key("a"),
        Span::raw(" all  "),
        key("e"),
        Span::raw(" expenses  "),
        key("i"),
        Span::raw(" income  "),
    ];
    if app.current_page == Page::Transactions {
        spans.push(key("c"));
        spans.push(Span::raw(" category  "));
        spans.push(key("d"));
        spans.push(Span::raw(" delete  "));
        spans.push(key("Enter"));
        spans.push(Span::raw(" detail  "));
    }
    spans.push(key("Tab"));
    spans.push(Span::raw(" page  "));
    spans.push(key("↑/↓"));
    spans.push(Span::raw(" move  "));
    spans.push(Span::styled("q", Style::default().fg(Color::Red)));
    spans.push(Span::raw(" quit"));

    let status_bar = Paragraph::new(vec![Line::from(spans)]).block(
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
        let cut: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finance_ledger::sample_transactions;

    fn app() -> App {
        App::new(
            Ledger::from_transactions(sample_transactions()),
            "€".to_string(),
            500.0,
        )
    }

    #[test]
    fn test_new_selects_first_row() {
        let app = app();
        assert_eq!(app.filtered_transactions.len(), 5);
        assert_eq!(app.selected_transaction().unwrap().id, 1);
    }

    #[test]
    fn test_type_filters() {
        let mut app = app();

        app.apply_filter(FilterType::Expenses);
        assert_eq!(app.filtered_transactions.len(), 3);
        assert!(app.filtered_transactions.iter().all(|tx| tx.is_expense()));

        app.apply_filter(FilterType::Income);
        assert_eq!(app.filtered_transactions.len(), 2);

        app.apply_filter(FilterType::Category("HOUSING".to_string()));
        assert_eq!(app.filtered_transactions.len(), 1);
        assert_eq!(app.filtered_transactions[0].description, "Rent");
    }

    #[test]
    fn test_empty_filter_clears_selection() {
        let mut app = app();
        app.apply_filter(FilterType::Category("travel".to_string()));
        assert!(app.selected_transaction().is_none());

        // Navigation on an empty table is a no-op
        app.next();
        app.previous();
        assert!(app.state.selected().is_none());
    }

    #[test]
    fn test_navigation_wraps() {
        let mut app = app();
        app.previous();
        assert_eq!(app.state.selected(), Some(4));
        app.next();
        assert_eq!(app.state.selected(), Some(0));
    }

    #[test]
    fn test_delete_selected_removes_from_ledger() {
        let mut app = app();
        app.next(); // id 2, Groceries

        let removed = app.delete_selected().unwrap();
        assert_eq!(removed.id, 2);
        assert_eq!(app.ledger.len(), 4);
        assert_eq!(app.filtered_transactions.len(), 4);
        assert_eq!(app.selected_transaction().unwrap().id, 3);
    }

    #[test]
    fn test_delete_selected_duplicate_id_removes_chosen_row() {
        let mut app = App::new(
            Ledger::from_transactions(vec![
                Transaction::new(7, TransactionType::Expense, "misc", 10.0, "first", "2026-01-01"),
                Transaction::new(7, TransactionType::Expense, "misc", 20.0, "second", "2026-01-02"),
            ]),
            "€".to_string(),
            500.0,
        );
        app.next();

        let removed = app.delete_selected().unwrap();
        assert_eq!(removed.description, "second");
        assert_eq!(
            app.ledger.iter().map(|tx| tx.description.as_str()).collect::<Vec<_>>(),
            vec!["first"]
        );
    }

    #[test]
    fn test_delete_selected_under_filter() {
        let mut app = app();
        app.apply_filter(FilterType::Expenses);
        app.next(); // Rent, ledger position 2

        let removed = app.delete_selected().unwrap();
        assert_eq!(removed.id, 3);
        assert_eq!(app.ledger.len(), 4);
        assert_eq!(app.filtered_transactions.len(), 2);
        assert_eq!(app.filtered_positions, vec![1, 3]);
    }

    #[test]
    fn test_filter_selected_category() {
        let mut app = app();
        app.next();
        app.filter_selected_category();
        assert_eq!(app.active_filter, FilterType::Category("food".to_string()));
        assert_eq!(app.filtered_transactions.len(), 1);
    }

    #[test]
    fn test_page_cycle() {
        assert_eq!(Page::Transactions.next(), Page::Months);
        assert_eq!(Page::Categories.next(), Page::Transactions);
        assert_eq!(Page::Transactions.previous(), Page::Categories);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a long description", 6), "a lon…");
    }
}
