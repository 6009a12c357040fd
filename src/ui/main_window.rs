use fltk::{
    app::Sender,
    enums::{Align, CallbackTrigger},
    frame::Frame,
    group::Flex,
    input::Input,
    menu::MenuBar,
    prelude::*,
    window::Window,
};

use crate::app::domain::messages::Message;

/// Field id of the orderer's phone number.
pub const ORDER_PHONE_ID: &str = "phone_number";
/// Field id of the delivery contact's phone number.
pub const CONTACT_PHONE_ID: &str = "contact_phone";

const ROW_HEIGHT: i32 = 30;
const LABEL_HEIGHT: i32 = 20;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub labels: Vec<Frame>,
    /// Phone inputs paired with their field ids
    pub phone_inputs: Vec<(&'static str, Input)>,
}

pub fn build_main_window(sender: &Sender<Message>, font_size: i32) -> MainWidgets {
    let mut wind = Window::new(100, 100, 360, 200, "PhonePad");
    wind.set_xclass("PhonePad");

    let mut flex = Flex::new(0, 0, 360, 200, None);
    flex.set_type(fltk::group::FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    let mut labels = Vec::new();
    let mut phone_inputs = Vec::new();
    for (id, label) in [
        (ORDER_PHONE_ID, "Your phone number"),
        (CONTACT_PHONE_ID, "Delivery contact phone"),
    ] {
        let mut frame = Frame::default().with_label(label);
        frame.set_align(Align::Left | Align::Inside);
        flex.fixed(&frame, LABEL_HEIGHT);

        let input = phone_input(id, sender, font_size);
        flex.fixed(&input, ROW_HEIGHT);

        labels.push(frame);
        phone_inputs.push((id, input));
    }

    // Filler so the rows stay at the top when the window grows
    Frame::default();

    flex.set_margin(10);
    flex.set_pad(4);
    flex.end();
    wind.resizable(&flex);
    wind.end();

    MainWidgets {
        wind,
        flex,
        menu,
        labels,
        phone_inputs,
    }
}

/// An input that reports every edit as `Message::PhoneEdited(id)`.
fn phone_input(id: &'static str, sender: &Sender<Message>, font_size: i32) -> Input {
    let mut input = Input::default();
    input.set_text_size(font_size);
    input.set_trigger(CallbackTrigger::Changed);
    let s = *sender;
    input.set_callback(move |_| s.send(Message::PhoneEdited(id.to_string())));
    input
}
