use crate::ui::app::App;
use crate::ui::footer;
use crate::ui::header::Header;
use crate::ui::input::key_hints;
use crate::ui::layout::layout_regions;
use crate::ui::navigation::Route;
use crate::ui::screens;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header_area, body, footer_area) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.route()), header_area);
    frame.render_widget(Clear, body);

    match app.route() {
        Route::Info => screens::info::render(frame, body),
        Route::Search => screens::search::render(frame, body, app),
        Route::Recipe { name, instructions } => {
            screens::recipe::render(frame, body, name, instructions, app.recipe_scroll())
        }
    }

    footer::render(frame, footer_area, key_hints(app));
}
