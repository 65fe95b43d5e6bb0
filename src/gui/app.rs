use iced::{Element, Task, Theme};

use super::screens::{Screen, ScreenData, ScreenMessage, home_page::HomeScreen};
use super::{AppState, Message};
use crate::config::Config;

/// Top-level iced application: one shared state plus the active screen.
pub struct FieldpostApp {
    state: AppState,
    screen: ScreenData,
}

impl FieldpostApp {
    pub fn new(config: Config) -> (Self, Task<Message>) {
        (
            Self {
                state: AppState::new(config),
                screen: ScreenData::Home(HomeScreen),
            },
            Task::none(),
        )
    }

    pub fn title(&self) -> String {
        "Fieldpost".to_string()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.screen.update(message, &mut self.state).map(unwrap_screen)
    }

    pub fn view(&self) -> Element<'_, Message> {
        self.screen.view(&self.state).map(unwrap_screen)
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn unwrap_screen(message: ScreenMessage<ScreenData>) -> Message {
    match message {
        ScreenMessage::ScreenMessage(message) => message,
        ScreenMessage::ParentMessage(never) => match never {},
    }
}

/// Boot the GUI with the given configuration.
pub fn run(config: Config) -> anyhow::Result<()> {
    iced::application(
        move || FieldpostApp::new(config.clone()),
        FieldpostApp::update,
        FieldpostApp::view,
    )
    .title(FieldpostApp::title)
    .theme(FieldpostApp::theme)
    .run()?;
    Ok(())
}
