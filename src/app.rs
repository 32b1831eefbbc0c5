use std::path::PathBuf;

use iced::event::{self, Event};
use iced::{window, Element, Size, Subscription, Task, Theme};
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::locale::Locale;
use crate::media::intake;
use crate::state::data::FileEntry;
use crate::state::handoff::{Handoff, Viewer};
use crate::state::session::Session;
use crate::ui::gallery::{self, HEADER_HIDE_OFFSET};
use crate::ui::outside::{self, OutsideInteractionDetector, PointerEvent};
use crate::ui::viewer;

/// Initial window size; also the detector's viewport until the first resize
pub const WINDOW_SIZE: Size = Size {
    width: 1100.0,
    height: 800.0,
};

/// Which screen is showing
#[derive(Debug)]
pub enum Screen {
    Gallery,
    /// A viewer always owns the reference it was handed
    Viewer(Handoff),
}

/// Main application state
pub struct App {
    session: Session,
    screen: Screen,
    locale: Locale,
    config: AppConfig,
    detector: OutsideInteractionDetector,
    header_visible: bool,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked "Choose files"
    PickFiles,
    /// A file was dropped onto the window
    FileDropped(PathBuf),
    /// Background read finished with a batch of entries
    FilesLoaded(Vec<FileEntry>),
    Remove(usize),
    SelectToggle(usize),
    ZoomToggle(usize),
    /// From the outside-press listener, only while something is zoomed
    Pointer(PointerEvent),
    /// Window opened or resized
    Resized(Size),
    /// Vertical scroll offset of the gallery
    Scrolled(f32),
    ViewSolution,
    CheckSolution,
    /// Leave the viewer and return to the gallery
    Back,
}

impl App {
    /// Create a new instance of the application
    pub fn new(config: AppConfig) -> (Self, Task<Message>) {
        let locale = Locale::resolve(&config);
        info!(locale = locale.tag(), "school killer initialized");

        let app = App {
            session: Session::new(),
            screen: Screen::Gallery,
            locale,
            detector: OutsideInteractionDetector::new(WINDOW_SIZE, config.zoom_size),
            config,
            header_visible: true,
        };
        (app, Task::none())
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn header_visible(&self) -> bool {
        self.header_visible
    }

    pub fn title(&self) -> String {
        match &self.screen {
            Screen::Gallery => self.locale.labels().title.to_string(),
            Screen::Viewer(handoff) => {
                let labels = self.locale.labels();
                let heading = match handoff.viewer() {
                    Viewer::Solution => labels.solution_heading,
                    Viewer::CheckSolution => labels.check_heading,
                };
                format!("{} - {}", labels.title, heading)
            }
        }
    }

    /// Handle application messages and update state
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickFiles => {
                let title = self.locale.labels().choose_files.to_string();
                return Task::perform(intake::pick_files(title), Message::FilesLoaded);
            }
            Message::FileDropped(path) => {
                debug!(path = %path.display(), "file dropped");
                return Task::perform(intake::load_entries(vec![path]), Message::FilesLoaded);
            }
            Message::FilesLoaded(entries) => {
                self.session.append(entries);
            }
            Message::Remove(index) => {
                if let Err(err) = self.session.remove_at(index) {
                    debug!(%err, "ignoring removal");
                }
            }
            Message::SelectToggle(index) => self.session.select_toggle(index),
            Message::ZoomToggle(index) => self.session.zoom_toggle(index),
            Message::Pointer(event) => {
                if self.detector.handle(event, &mut self.session) {
                    debug!("zoom collapsed by outside press");
                }
            }
            Message::Resized(size) => self.detector.set_viewport(size),
            Message::Scrolled(offset) => self.header_visible = offset <= HEADER_HIDE_OFFSET,
            Message::ViewSolution => self.hand_off(Viewer::Solution),
            Message::CheckSolution => self.hand_off(Viewer::CheckSolution),
            Message::Back => {
                if let Screen::Viewer(handoff) = std::mem::replace(&mut self.screen, Screen::Gallery) {
                    self.session.release(handoff);
                }
            }
        }

        self.sync_after_update();
        Task::none()
    }

    /// Keep view-side state in step with the session after every transition
    fn sync_after_update(&mut self) {
        // The pointer listener goes away with the zoom, so its last position is stale
        if self.session.zoomed().is_none() {
            self.detector.clear_cursor();
        }
        // The grid's scrollable is rebuilt at offset 0 when it comes back
        if self.session.zoomed().is_some() || matches!(self.screen, Screen::Viewer(_)) {
            self.header_visible = true;
        }
    }

    fn hand_off(&mut self, viewer: Viewer) {
        match self.session.hand_off(viewer) {
            Ok(handoff) => self.screen = Screen::Viewer(handoff),
            Err(err) => debug!(%err, "handoff ignored"),
        }
    }

    /// Build the user interface
    pub fn view(&self) -> Element<'_, Message> {
        let labels = self.locale.labels();

        match &self.screen {
            Screen::Viewer(handoff) => viewer::view(handoff, labels),
            Screen::Gallery => match self.session.zoomed() {
                Some(index) => gallery::zoomed(&self.session, index, self.detector.region()),
                None => gallery::view(
                    &self.session,
                    labels,
                    self.config.thumbnail_size,
                    self.header_visible,
                ),
            },
        }
    }

    /// Window events always; the outside-press listener only while zoomed
    pub fn subscription(&self) -> Subscription<Message> {
        let window_events = event::listen_with(|event, _status, _window| match event {
            Event::Window(window::Event::Opened { size, .. }) => Some(Message::Resized(size)),
            Event::Window(window::Event::Resized(size)) => Some(Message::Resized(size)),
            Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
            _ => None,
        });

        let zoomed = matches!(self.screen, Screen::Gallery) && self.session.zoomed().is_some();
        if zoomed {
            Subscription::batch([window_events, outside::subscription().map(Message::Pointer)])
        } else {
            window_events
        }
    }

    /// Set the application theme
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Launch the iced event loop
pub fn run(config: AppConfig) -> iced::Result {
    iced::application(App::title, App::update, App::view)
        .theme(App::theme)
        .subscription(App::subscription)
        .window_size(WINDOW_SIZE)
        .centered()
        .run_with(move || App::new(config))
}
