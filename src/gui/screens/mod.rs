pub mod home_page;
pub mod report_page;

use iced::{Element, Task};

use crate::gui::{AppState, Message};

/// A message either handled by the screen itself or bubbled up to the
/// screen router.
#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug + Clone;
    type ParentMessage: std::fmt::Debug + Clone;
    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

/// The page selector: exactly one of the two screens renders at a time.
#[derive(Debug, Clone)]
pub enum ScreenData {
    Home(home_page::HomeScreen),
    Report(report_page::ReportScreen),
}

impl Screen for ScreenData {
    type Message = Message;
    type ParentMessage = std::convert::Infallible;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        match self {
            ScreenData::Home(screen) => screen.view(state).map(Message::Home),
            ScreenData::Report(screen) => screen.view(state).map(Message::Report),
        }
        .map(ScreenMessage::ScreenMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match (self, message) {
            (screen, Message::ChangeScreen(next)) => {
                *screen = next;
                Task::none()
            }
            (ScreenData::Home(page), Message::Home(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::Home)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(home_page::ParentMessage::Entered) => {
                    Task::done(ScreenMessage::ScreenMessage(Message::ChangeScreen(
                        ScreenData::Report(report_page::ReportScreen::default()),
                    )))
                }
            },
            (ScreenData::Report(page), Message::Report(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::Report)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent) => match parent {},
            },
            _ => Task::none(),
        }
    }
}
