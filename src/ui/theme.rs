use fltk::{
    enums::Color,
    frame::Frame,
    input::Input,
    menu::MenuBar,
    prelude::*,
    window::Window,
};

pub fn apply_theme(
    window: &mut Window,
    menu: &mut MenuBar,
    labels: &mut [Frame],
    inputs: &mut [Input],
    is_dark: bool,
) {
    let (bg, fg, field_bg, selection) = if is_dark {
        (
            Color::from_rgb(25, 25, 25),
            Color::from_rgb(220, 220, 220),
            Color::from_rgb(40, 40, 40),
            Color::from_rgb(70, 70, 100),
        )
    } else {
        (
            Color::from_rgb(240, 240, 240),
            Color::Black,
            Color::White,
            Color::from_rgb(173, 216, 230),
        )
    };

    window.set_color(bg);
    window.set_label_color(fg);
    menu.set_color(if is_dark { Color::from_rgb(35, 35, 35) } else { bg });
    menu.set_text_color(fg);
    menu.set_selection_color(if is_dark { Color::from_rgb(60, 60, 60) } else { Color::from_rgb(200, 200, 200) }); // Hover color

    for label in labels.iter_mut() {
        label.set_label_color(fg);
        label.redraw();
    }
    for input in inputs.iter_mut() {
        input.set_color(field_bg);
        input.set_text_color(fg);
        input.set_cursor_color(fg);
        input.set_selection_color(selection);
        input.redraw();
    }

    window.redraw();
    menu.redraw();
}
