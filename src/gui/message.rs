use crate::gui::screens::{
    ScreenData, ScreenMessage, home_page::HomeScreen, report_page::ReportScreen,
};

#[derive(Debug, Clone)]
pub enum Message {
    Home(ScreenMessage<HomeScreen>),
    Report(ScreenMessage<ReportScreen>),
    ChangeScreen(ScreenData),
}
