use iced::{
    Element, Length, Task, Color, Alignment, Border, Subscription,
};
use iced::keyboard;
use iced::widget::{
    Column, Row, Container, Text, Button, TextInput, Scrollable, Space, rule, text, text_input,
};

use crate::commands::{self, Command, Form, Outcome};
use crate::config::AppConfig;
use crate::currency;
use crate::prompt::{PromptSequence, Step};
use crate::report::{self, Capabilities, ChartPoint, TableRow};
use crate::storage::DataFile;
use crate::store::EmployeeStore;
use chrono::{DateTime, Local};
use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

const RECENT_ACTIVITY: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

#[derive(Debug, Clone)]
pub enum Message {
    Run(Command),
    Shortcut(Command),
    AnswerChanged(String),
    SubmitAnswer,
    CancelPrompt,
    ExitConfirmed(bool),
    ToggleTheme,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum StatusKind {
    Success,
    Error,
    Info,
}

struct Activity {
    at: DateTime<Local>,
    kind: StatusKind,
    message: String,
}

enum View {
    Home,
    Table(Vec<TableRow>),
    Chart(Vec<ChartPoint>),
}

struct ActivePrompt {
    form: Form,
    sequence: PromptSequence,
    answer: String,
}

pub struct SalaryDeskApp {
    store: EmployeeStore,
    caps: Capabilities,
    prompt: Option<ActivePrompt>,
    view: View,
    status: Option<(StatusKind, String)>,
    activity: Vec<Activity>,
    confirming_exit: bool,
    theme: Theme,
}

fn prompt_input_id() -> text_input::Id {
    text_input::Id::new("prompt-answer")
}

fn confirm_exit() -> bool {
    let answer = MessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title("Exit")
        .set_description("Do you want to exit the program?")
        .set_buttons(MessageButtons::YesNo)
        .show();
    matches!(answer, MessageDialogResult::Yes)
}

impl SalaryDeskApp {
    pub fn new(config: AppConfig) -> (Self, Task<Message>) {
        let store = EmployeeStore::open(DataFile::new(config.data_file));
        let caps = Capabilities::detect();
        tracing::debug!(table = caps.table, chart = caps.chart, "renderer capabilities");
        (
            SalaryDeskApp {
                store,
                caps,
                prompt: None,
                view: View::Home,
                status: None,
                activity: Vec::new(),
                confirming_exit: false,
                theme: Theme::Dark,
            },
            Task::none(),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Shortcut(_) if self.prompt.is_some() || self.confirming_exit => {}
            Message::Run(command) | Message::Shortcut(command) => {
                if self.prompt.take().is_some() {
                    tracing::debug!("open prompt abandoned");
                }
                let outcome = commands::begin(command, &self.store, self.caps);
                return self.handle(outcome);
            }
            Message::AnswerChanged(s) => {
                if let Some(p) = self.prompt.as_mut() {
                    p.answer = s;
                }
            }
            Message::SubmitAnswer => {
                if let Some(mut p) = self.prompt.take() {
                    let answer = std::mem::take(&mut p.answer);
                    match p.sequence.submit(answer) {
                        Step::Next => {
                            self.prompt = Some(p);
                            return text_input::focus(prompt_input_id());
                        }
                        Step::Complete(answers) => {
                            let outcome = commands::finish(p.form, answers, &mut self.store);
                            return self.handle(outcome);
                        }
                    }
                }
            }
            Message::CancelPrompt => {
                // Nothing was recorded yet, dropping the answers is enough.
                if let Some(p) = self.prompt.take() {
                    tracing::debug!(title = p.sequence.title(), "prompt cancelled");
                }
            }
            Message::ExitConfirmed(true) => {
                tracing::info!("exiting");
                return iced::exit();
            }
            Message::ExitConfirmed(false) => {
                self.confirming_exit = false;
            }
            Message::ToggleTheme => {
                self.theme = match self.theme {
                    Theme::Light => Theme::Dark,
                    Theme::Dark => Theme::Light,
                };
            }
        }
        Task::none()
    }

    fn handle(&mut self, outcome: Outcome) -> Task<Message> {
        match outcome {
            Outcome::Prompt(form, sequence) => {
                self.prompt = Some(ActivePrompt { form, sequence, answer: String::new() });
                return text_input::focus(prompt_input_id());
            }
            Outcome::Success(msg) => {
                self.record(StatusKind::Success, msg);
                self.refresh_view();
            }
            Outcome::Failure(msg) => self.record(StatusKind::Error, msg),
            Outcome::Info(msg) => self.record(StatusKind::Info, msg),
            Outcome::Table(rows) => {
                self.status = None;
                self.view = View::Table(rows);
            }
            Outcome::Chart(series) => {
                self.status = None;
                self.view = View::Chart(series);
            }
            Outcome::ConfirmExit => {
                if !self.confirming_exit {
                    self.confirming_exit = true;
                    return Task::perform(async { confirm_exit() }, Message::ExitConfirmed);
                }
            }
        }
        Task::none()
    }

    fn record(&mut self, kind: StatusKind, message: String) {
        self.activity.insert(0, Activity { at: Local::now(), kind, message: message.clone() });
        self.activity.truncate(RECENT_ACTIVITY);
        self.status = Some((kind, message));
    }

    /// Rebuilds an open table or chart after the data changed.
    fn refresh_view(&mut self) {
        let records = self.store.records();
        self.view = match &self.view {
            View::Home => View::Home,
            View::Table(_) => match report::table_view(records) {
                Ok(rows) => View::Table(rows),
                Err(_) => View::Home,
            },
            View::Chart(_) => match report::chart_view(records) {
                Ok(series) => View::Chart(series),
                Err(_) => View::Home,
            },
        };
    }

    pub fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, modifiers| {
            if modifiers.command() || modifiers.alt() {
                return None;
            }
            match key.as_ref() {
                keyboard::Key::Character(c) => Command::from_shortcut(c).map(Message::Shortcut),
                _ => None,
            }
        })
    }

    pub fn view(&self) -> Element<'_, Message> {
        let sidebar = self.view_sidebar();

        let mut main_content = Column::new()
            .padding(40)
            .spacing(25)
            .width(Length::Fill);
        if let Some((kind, msg)) = &self.status {
            main_content = main_content.push(self.view_status(*kind, msg));
        }
        if let Some(p) = &self.prompt {
            main_content = main_content.push(self.view_prompt(p));
        }
        main_content = main_content.push(match &self.view {
            View::Home => self.view_home(),
            View::Table(rows) => self.view_table(rows),
            View::Chart(series) => self.view_chart(series),
        });

        let layout = Row::new()
            .push(sidebar)
            .push(rule::Rule::vertical(1))
            .push(main_content);

        let bg_color = self.bg_color();
        Container::new(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme| {
                iced::widget::container::Style {
                    background: Some(iced::Background::Color(bg_color)),
                    border: Border::default(),
                    ..Default::default()
                }
            })
            .into()
    }

    fn view_sidebar(&self) -> Element<'_, Message> {
        let title = label("Salary Desk", 28.0, self.accent_color());
        let subtitle = label("Employee Salary Management", 14.0, self.secondary_text_color());

        let mut buttons = Column::new().spacing(8);
        for command in Command::all() {
            buttons = buttons.push(
                Button::new(Text::new(format!("{}  [{}]", command.label(), command.shortcut())).size(14))
                    .on_press(Message::Run(command))
                    .padding(10)
                    .width(Length::Fill),
            );
        }

        let theme_btn = Button::new(
            Text::new(match self.theme {
                Theme::Light => "🌙 Dark Mode",
                Theme::Dark => "☀️ Light Mode",
            })
                .size(14)
        )
        .on_press(Message::ToggleTheme)
        .padding(10)
        .width(Length::Fill);

        let mut sidebar_content = Column::new()
            .padding(20)
            .spacing(16)
            .width(Length::Fixed(300.0))
            .push(title)
            .push(subtitle)
            .push(rule::Rule::horizontal(1))
            .push(buttons)
            .push(theme_btn);

        if !self.activity.is_empty() {
            sidebar_content = sidebar_content
                .push(rule::Rule::horizontal(1))
                .push(label("Recent Activity", 14.0, self.text_color()));

            let mut history_list = Column::new().spacing(8);
            for entry in &self.activity {
                let (icon, color) = status_style(entry.kind);
                history_list = history_list.push(
                    Column::new()
                        .spacing(2)
                        .push(
                            Row::new()
                                .spacing(5)
                                .push(label(icon, 12.0, color))
                                .push(label(first_line(&entry.message), 12.0, self.text_color())),
                        )
                        .push(label(entry.at.format("%m/%d %H:%M").to_string(), 10.0, self.tertiary_text_color())),
                );
            }
            sidebar_content = sidebar_content.push(Scrollable::new(history_list).height(Length::Fixed(220.0)));
        }

        let sidebar_bg = self.sidebar_bg_color();
        Container::new(sidebar_content)
            .height(Length::Fill)
            .style(move |_theme| {
                iced::widget::container::Style {
                    background: Some(iced::Background::Color(sidebar_bg)),
                    border: Border::default(),
                    ..Default::default()
                }
            })
            .into()
    }

    fn view_status<'a>(&self, kind: StatusKind, msg: &'a str) -> Element<'a, Message> {
        let (icon, color) = status_style(kind);
        let container_bg = self.container_bg_color();
        Container::new(
            Row::new()
                .spacing(12)
                .push(label(icon, 20.0, color))
                .push(label(msg, 16.0, self.text_color())),
        )
        .padding(15)
        .width(Length::Fill)
        .style(move |_theme| {
            iced::widget::container::Style {
                background: Some(iced::Background::Color(container_bg)),
                border: Border {
                    color,
                    width: 1.0,
                    radius: 4.0.into(),
                },
                ..Default::default()
            }
        })
        .into()
    }

    fn view_prompt<'a>(&self, p: &'a ActivePrompt) -> Element<'a, Message> {
        let (step, total) = p.sequence.position();
        let input = TextInput::new("Type and press Enter", &p.answer)
            .id(prompt_input_id())
            .on_input(Message::AnswerChanged)
            .on_submit(Message::SubmitAnswer)
            .padding(12)
            .size(16)
            .width(Length::Fill);

        let cancel_btn = Button::new(Text::new("Cancel").size(16))
            .on_press(Message::CancelPrompt)
            .padding(12)
            .width(Length::Fixed(150.0));
        let next_btn = Button::new(Text::new(if p.sequence.remaining() > 1 { "Next →" } else { "Submit" }).size(16))
            .on_press(Message::SubmitAnswer)
            .padding(12)
            .width(Length::Fixed(150.0));

        let container_bg = self.container_bg_color();
        let border_color = self.border_color();
        Container::new(
            Column::new()
                .spacing(15)
                .push(label(p.sequence.title(), 24.0, self.text_color()))
                .push(label(format!("Step {step} of {total}"), 12.0, self.tertiary_text_color()))
                .push(label(p.sequence.current().unwrap_or_default(), 16.0, self.secondary_text_color()))
                .push(input)
                .push(Row::new().spacing(20).push(cancel_btn).push(next_btn)),
        )
        .padding(20)
        .width(Length::Fill)
        .style(move |_theme| {
            iced::widget::container::Style {
                background: Some(iced::Background::Color(container_bg)),
                border: Border {
                    color: border_color,
                    width: 1.0,
                    radius: 4.0.into(),
                },
                ..Default::default()
            }
        })
        .into()
    }

    fn view_home(&self) -> Element<'_, Message> {
        let symbols: Vec<&str> = currency::supported_symbols().collect();
        Column::new()
            .spacing(12)
            .push(label("Employee Salary Management System", 32.0, self.text_color()))
            .push(label(
                "Choose a command on the left or press 1-7.",
                16.0,
                self.secondary_text_color(),
            ))
            .push(label(
                if self.store.is_empty() {
                    "No employees registered yet.".to_string()
                } else {
                    format!("{} employee(s) on record", self.store.records().len())
                },
                14.0,
                self.tertiary_text_color(),
            ))
            .push(label(
                format!("Accepted currencies: {}", symbols.join("  ")),
                14.0,
                self.tertiary_text_color(),
            ))
            .into()
    }

    fn view_table<'a>(&self, rows: &'a [TableRow]) -> Element<'a, Message> {
        let text_color = self.text_color();
        let header_color = self.accent_color();
        let cell = move |content: String, color: Color| {
            Container::new(label(content, 14.0, color))
                .center_x(Length::Fixed(150.0))
        };

        let mut header = Row::new().spacing(4);
        for h in report::TABLE_HEADERS {
            header = header.push(cell(h.to_string(), header_color));
        }

        let mut body = Column::new().spacing(6);
        for row in rows {
            let mut r = Row::new().spacing(4);
            for c in row.cells() {
                r = r.push(cell(c, text_color));
            }
            body = body.push(r);
        }

        Column::new()
            .spacing(10)
            .push(header)
            .push(rule::Rule::horizontal(1))
            .push(Scrollable::new(body).height(Length::Fill))
            .into()
    }

    fn view_chart<'a>(&self, series: &'a [ChartPoint]) -> Element<'a, Message> {
        let max = series.iter().map(|p| p.value).fold(0.0_f64, f64::max);
        let text_color = self.text_color();
        let secondary_text = self.secondary_text_color();

        let mut bars = Row::new().spacing(16).height(Length::Fixed(380.0)).align_y(Alignment::End);
        for (i, point) in series.iter().enumerate() {
            let portion = bar_portion(point.value, max);
            let color = bar_color(i, series.len());
            let bar = Container::new(Space::with_width(Length::Fill))
                .width(Length::Fill)
                .height(Length::FillPortion(portion.max(1)))
                .style(move |_theme| {
                    iced::widget::container::Style {
                        background: Some(iced::Background::Color(color)),
                        border: Border {
                            color: Color::BLACK,
                            width: 1.0,
                            radius: 0.0.into(),
                        },
                        ..Default::default()
                    }
                });
            bars = bars.push(
                Column::new()
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(Alignment::Center)
                    .spacing(4)
                    .push(Space::with_height(Length::FillPortion((BAR_SCALE - portion).max(1))))
                    .push(label(report::format_reference(point.value), 12.0, text_color))
                    .push(bar)
                    .push(label(point.label.as_str(), 11.0, secondary_text)),
            );
        }

        Column::new()
            .spacing(12)
            .push(label(report::CHART_TITLE, 22.0, self.accent_color()))
            .push(label(report::CHART_AXIS, 12.0, secondary_text))
            .push(bars)
            .into()
    }

    // Theme color helpers
    fn bg_color(&self) -> Color {
        match self.theme {
            Theme::Light => Color::from_rgb(1.0, 1.0, 1.0),
            Theme::Dark => Color::from_rgb(0.05, 0.05, 0.06),
        }
    }

    fn sidebar_bg_color(&self) -> Color {
        match self.theme {
            Theme::Light => Color::from_rgb(0.95, 0.95, 0.97),
            Theme::Dark => Color::from_rgb(0.12, 0.12, 0.14),
        }
    }

    fn text_color(&self) -> Color {
        match self.theme {
            Theme::Light => Color::from_rgb(0.1, 0.1, 0.1),
            Theme::Dark => Color::from_rgb(0.92, 0.92, 0.92),
        }
    }

    fn secondary_text_color(&self) -> Color {
        match self.theme {
            Theme::Light => Color::from_rgb(0.4, 0.4, 0.4),
            Theme::Dark => Color::from_rgb(0.65, 0.65, 0.65),
        }
    }

    fn tertiary_text_color(&self) -> Color {
        Color::from_rgb(0.5, 0.5, 0.5)
    }

    fn container_bg_color(&self) -> Color {
        match self.theme {
            Theme::Light => Color::from_rgb(0.95, 0.95, 0.95),
            Theme::Dark => Color::from_rgb(0.17, 0.17, 0.19),
        }
    }

    fn border_color(&self) -> Color {
        match self.theme {
            Theme::Light => Color::from_rgb(0.8, 0.8, 0.8),
            Theme::Dark => Color::from_rgb(0.3, 0.3, 0.32),
        }
    }

    fn accent_color(&self) -> Color {
        Color::from_rgb(0.05, 0.32, 0.5)
    }
}

const BAR_SCALE: u16 = 1000;

/// Bar height as a share of [`BAR_SCALE`].
fn bar_portion(value: f64, max: f64) -> u16 {
    if max <= 0.0 || value <= 0.0 {
        return 0;
    }
    ((value / max).min(1.0) * f64::from(BAR_SCALE)).round() as u16
}

/// Spreads bars over a green-to-yellow ramp.
fn bar_color(i: usize, n: usize) -> Color {
    let t = if n > 1 { i as f32 / (n - 1) as f32 } else { 0.0 };
    let (from, to) = ((0.13, 0.57, 0.55), (0.74, 0.87, 0.15));
    Color::from_rgb(
        from.0 + (to.0 - from.0) * t,
        from.1 + (to.1 - from.1) * t,
        from.2 + (to.2 - from.2) * t,
    )
}

fn status_style(kind: StatusKind) -> (&'static str, Color) {
    match kind {
        StatusKind::Success => ("✓", Color::from_rgb(0.2, 0.7, 0.2)),
        StatusKind::Error => ("✗", Color::from_rgb(0.9, 0.2, 0.2)),
        StatusKind::Info => ("ℹ", Color::from_rgb(0.2, 0.5, 0.8)),
    }
}

fn first_line(s: &str) -> &str {
    s.lines().next().unwrap_or_default()
}

fn label<'a>(content: impl text::IntoFragment<'a>, size: f32, color: Color) -> Text<'a> {
    Text::new(content)
        .size(size)
        .style(move |_theme| {
            text::Style {
                color: Some(color),
            }
        })
}
