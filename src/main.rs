use clap::Parser;
use fltk::{app, prelude::*};

use phone_pad::app::controllers::{FormController, Outcome};
use phone_pad::app::domain::messages::Message;
use phone_pad::app::domain::settings::{AppSettings, ThemeMode};
use phone_pad::app::infrastructure::cli::Cli;
use phone_pad::app::infrastructure::error::AppError;
use phone_pad::app::infrastructure::field::FieldRegistry;
use phone_pad::app::infrastructure::logging::init_logger;
use phone_pad::ui::main_window::build_main_window;
use phone_pad::ui::menu::build_menu;
use phone_pad::ui::theme::apply_theme;

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let settings = AppSettings::load();
    tracing::debug!(?settings, "settings loaded");

    let mut w = build_main_window(&sender, settings.font_size_px());
    build_menu(&mut w.menu, &sender, &settings);

    let mut fields = FieldRegistry::new();
    for (id, input) in &w.phone_inputs {
        fields.register(*id, input.clone());
    }
    let mut inputs: Vec<_> = w.phone_inputs.iter().map(|(_, input)| input.clone()).collect();

    let mut controller = FormController::new(fields, settings);
    // Inputs may start with text; bring it into shape before the first edit
    controller.formatter.format_all(&mut controller.fields);

    let is_dark = controller.settings.theme_mode == ThemeMode::Dark;
    apply_theme(&mut w.wind, &mut w.menu, &mut w.labels, &mut inputs, is_dark);

    w.wind.show();
    tracing::info!(fields = controller.fields.len(), "phone form ready");

    while app.wait() {
        let Some(msg) = receiver.recv() else {
            continue;
        };
        match controller.handle(msg) {
            Ok(Outcome::Continue) => {}
            Ok(Outcome::ThemeChanged(mode)) => {
                apply_theme(
                    &mut w.wind,
                    &mut w.menu,
                    &mut w.labels,
                    &mut inputs,
                    mode == ThemeMode::Dark,
                );
            }
            Ok(Outcome::Quit) => app.quit(),
            // Already logged by the controller
            Err(AppError::ElementNotFound(_)) => {}
            Err(e) => tracing::warn!("{}", e),
        }
    }
}
