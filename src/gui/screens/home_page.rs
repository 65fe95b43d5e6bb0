use iced::{
    Alignment::Center,
    Element, Task,
    widget::{button, column, container, text},
};

use crate::flow::Action;
use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage},
};

/// Entry screen shown at launch.
#[derive(Debug, Clone, Default)]
pub struct HomeScreen;

#[derive(Debug, Clone)]
pub enum HomeMessage {
    EnterPressed,
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    Entered,
}

impl Screen for HomeScreen {
    type Message = HomeMessage;
    type ParentMessage = ParentMessage;

    fn view<'a>(&'a self, _state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let content = column![
            text("Fieldpost").size(32),
            text("Photo reports with location details"),
            button("Enter").on_press(ScreenMessage::ScreenMessage(HomeMessage::EnterPressed)),
        ]
        .spacing(20)
        .padding(20)
        .align_x(Center);

        container(content)
            .center_x(iced::Length::Fill)
            .center_y(iced::Length::Fill)
            .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            HomeMessage::EnterPressed => {
                // No effects come back from the page transition.
                let _ = state.flow.apply(Action::EnterPressed);
                Task::done(ScreenMessage::ParentMessage(ParentMessage::Entered))
            }
        }
    }
}
