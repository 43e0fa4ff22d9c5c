#![windows_subsystem = "windows"]
//! InspireMe - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod api;
mod app;
mod constants;
mod settings;
mod theme;
mod types;
mod ui;
mod utils;

use app::App;
use constants::*;
use eframe::egui;
use std::time::Instant;
use tracing::info;
use types::Route;
use ui::components;
use utils::get_data_dir;

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "inspireme.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,inspireme=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = get_data_dir();
    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "InspireMe starting");

    // Load saved window position/size
    let settings = settings::Settings::load(&data_dir);
    let win_pos = match (settings.window_x, settings.window_y) {
        (Some(x), Some(y)) => Some(egui::pos2(x, y)),
        _ => None,
    };
    let win_size = match (settings.window_w, settings.window_h) {
        (Some(w), Some(h)) => Some(egui::vec2(w, h)),
        _ => None,
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(win_size.unwrap_or(egui::vec2(900.0, 720.0)))
        .with_min_inner_size([640.0, 480.0])
        .with_title("InspireMe");

    // Window/taskbar icon rasterized from the embedded SVG logo
    {
        let (pixels, w, h) = utils::rasterize_logo(256);
        let icon = egui::IconData {
            rgba: pixels,
            width: w,
            height: h,
        };
        viewport = viewport.with_icon(std::sync::Arc::new(icon));
    }

    let needs_center = win_pos.is_none();

    if let Some(pos) = win_pos {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "InspireMe",
        options,
        Box::new(move |cc| {
            let mut app = App::new(cc, settings, data_dir);
            app.needs_center = needs_center;
            Ok(Box::new(app))
        }),
    )
}

// ============================================================================
// MAIN UPDATE LOOP & UI RENDERING
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // Fetch the first quote on the first frame
        if !self.initial_fetch_done {
            self.initial_fetch_done = true;
            self.fetch_quote(ctx);
        }

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        // Apply completed API calls to view state
        self.poll_api_events();

        // A show transition or "Add Random" asked for a fresh collection
        if self.saved.needs_reload && self.saved_list_on_screen() && !self.saved.loading {
            self.saved.needs_reload = false;
            self.load_saved(ctx);
        }

        // Expire timed banners; keep repainting while any is visible
        let now = Instant::now();
        let banners_active = self.home.tick(now) | self.saved.tick(now);
        if banners_active {
            ctx.request_repaint_after(std::time::Duration::from_millis(200));
        }

        // Add-quote modal (centered overlay)
        self.render_add_modal(ctx);

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(16)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink(false)
                    .show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.set_max_width(760.0);
                            self.render_header(ui, ctx);
                            match self.route {
                                Route::Home => self.render_home(ui, ctx),
                                Route::Saved => self.render_saved_screen(ui, ctx),
                            }
                            self.render_footer(ui);
                        });
                    });
            });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application shutting down");
        self.save_settings();
    }
}

// ============================================================================
// HEADER & FOOTER
// ============================================================================

impl App {
    fn render_header(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.add_space(theme::SPACING_XL);

        let logo_id = self
            .logo_texture
            .get_or_insert_with(|| {
                let (pixels, w, h) = utils::rasterize_logo(96);
                ctx.load_texture(
                    "logo",
                    egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], &pixels),
                    egui::TextureOptions::LINEAR,
                )
            })
            .id();

        ui.horizontal(|ui| {
            ui.image(egui::load::SizedTexture::new(logo_id, egui::vec2(40.0, 40.0)));
            ui.add(
                egui::Label::new(
                    egui::RichText::new("InspireMe")
                        .size(theme::FONT_TITLE)
                        .strong()
                        .color(theme::TEXT_PRIMARY),
                )
                .selectable(false),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                match self.route {
                    Route::Home => {
                        let label =
                            format!("{} Saved Quotes", egui_phosphor::regular::BOOK_OPEN);
                        if ui.add(theme::button(label)).clicked() {
                            self.open_saved_screen();
                        }
                    }
                    Route::Saved => {
                        let label = format!("{} Home", egui_phosphor::regular::HOUSE);
                        if ui.add(theme::button(label)).clicked() {
                            self.close_saved_screen();
                        }
                    }
                }
            });
        });

        ui.add(
            egui::Label::new(
                egui::RichText::new(format!(
                    "{} Your Daily Dose of Wisdom & Motivation {}",
                    egui_phosphor::regular::SPARKLE,
                    egui_phosphor::regular::SPARKLE
                ))
                .size(theme::FONT_BODY)
                .color(theme::TEXT_SECONDARY),
            )
            .selectable(false),
        );

        ui.add_space(theme::SPACING_XL);
    }

    fn render_footer(&mut self, ui: &mut egui::Ui) {
        ui.add_space(theme::SPACING_XL * 2.0);
        ui.add(
            egui::Label::new(
                egui::RichText::new(format!(
                    "Made with {} for inspiration seekers worldwide  •  v{}",
                    egui_phosphor::regular::HEART,
                    APP_VERSION
                ))
                .size(theme::FONT_SMALL)
                .color(theme::TEXT_DIM),
            )
            .selectable(false),
        );
        ui.add_space(theme::SPACING_MD);
    }
}

// ============================================================================
// HOME VIEW
// ============================================================================

impl App {
    fn render_home(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        // Quote display: spinner while loading, otherwise the card
        if self.home.loading {
            components::loading_indicator(ui, "Loading inspiration...");
        }

        if let Some(banner) = &self.home.error {
            components::error_banner(ui, &banner.text);
            ui.add_space(theme::SPACING_MD);
        }

        if !self.home.loading {
            if let Some(quote) = &self.home.quote {
                components::quote_card(ui, quote);
            }
        }

        ui.add_space(theme::SPACING_XL);

        // Action buttons
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = theme::SPACING_MD;

            let new_label = format!("{} New Quote", egui_phosphor::regular::ARROWS_CLOCKWISE);
            if ui
                .add_enabled(!self.home.loading, theme::button_accent(new_label))
                .clicked()
            {
                self.fetch_quote(ctx);
            }

            let save_label = format!("{} Save Quote", egui_phosphor::regular::FLOPPY_DISK);
            if ui
                .add_enabled(self.home.can_save(), theme::button(save_label))
                .clicked()
            {
                self.save_current(ctx);
            }

            let create_label = format!("{} Create Quote", egui_phosphor::regular::PEN_NIB);
            if ui.add(theme::button(create_label)).clicked() {
                self.open_add_modal();
            }

            let toggle_label = format!(
                "{} {} Saved",
                egui_phosphor::regular::BOOK_OPEN,
                if self.home.saved_visible { "Hide" } else { "View" }
            );
            if ui.add(theme::button(toggle_label)).clicked() {
                self.toggle_saved_list();
            }
        });

        if let Some(banner) = &self.home.message {
            ui.add_space(theme::SPACING_MD);
            components::success_banner(ui, &banner.text);
        }

        // Inline saved list
        if self.home.saved_visible {
            ui.add_space(theme::SPACING_XL);
            if self.render_saved_list(ui, ctx) {
                self.home.saved_visible = false;
            }
        }
    }
}

// ============================================================================
// SAVED QUOTES LIST
// ============================================================================

impl App {
    fn render_saved_screen(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        if self.render_saved_list(ui, ctx) {
            self.close_saved_screen();
        }
    }

    /// Renders the saved collection. Returns true when the close button
    /// was clicked; the caller decides whether that hides the inline list
    /// or navigates back home.
    fn render_saved_list(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) -> bool {
        let mut close_clicked = false;

        theme::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(format!(
                            "{} Your Collection",
                            egui_phosphor::regular::BOOK_OPEN
                        ))
                        .size(theme::FONT_HEADING)
                        .strong()
                        .color(theme::TEXT_PRIMARY),
                    )
                    .selectable(false),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let close_label = format!("{} Close", egui_phosphor::regular::X);
                    if ui.add(theme::button(close_label)).clicked() {
                        close_clicked = true;
                    }

                    let refresh_label =
                        format!("{} Refresh", egui_phosphor::regular::ARROWS_CLOCKWISE);
                    if ui
                        .add_enabled(!self.saved.loading, theme::button(refresh_label))
                        .clicked()
                    {
                        self.load_saved(ctx);
                    }

                    let add_label = format!("{} Add Random", egui_phosphor::regular::PLUS);
                    if ui
                        .add_enabled(!self.saved.loading, theme::button_accent(add_label))
                        .clicked()
                    {
                        self.add_random_quote(ctx);
                    }
                });
            });

            let count = self.saved.quotes.len();
            ui.add(
                egui::Label::new(
                    egui::RichText::new(format!(
                        "{} {} saved",
                        count,
                        if count == 1 { "quote" } else { "quotes" }
                    ))
                    .size(theme::FONT_LABEL)
                    .color(theme::TEXT_MUTED),
                )
                .selectable(false),
            );
        });

        ui.add_space(theme::SPACING_MD);

        if let Some(banner) = &self.saved.message {
            components::success_banner(ui, &banner.text);
            ui.add_space(theme::SPACING_MD);
        }

        if let Some(error) = &self.saved.error {
            components::error_banner(ui, error);
            ui.add_space(theme::SPACING_MD);
        }

        if self.saved.loading {
            components::loading_indicator(ui, "Loading...");
        } else if self.saved.quotes.is_empty() {
            components::empty_state(ui);
        } else {
            // Two-column grid of saved quote cards
            let quotes = self.saved.quotes.clone();
            let mut delete_requested: Option<String> = None;

            for row in quotes.chunks(2) {
                ui.columns(2, |cols| {
                    for (col, quote) in cols.iter_mut().zip(row) {
                        if components::saved_quote_card(col, quote) {
                            delete_requested = quote.id.clone();
                        }
                    }
                });
                ui.add_space(theme::SPACING_MD);
            }

            if let Some(id) = delete_requested {
                self.delete_quote(ctx, id);
            }
        }

        close_clicked
    }
}

// ============================================================================
// ADD QUOTE MODAL
// ============================================================================

impl App {
    fn render_add_modal(&mut self, ctx: &egui::Context) {
        if !self.show_add_modal {
            return;
        }

        let mut close_requested = false;
        let mut submit_requested = false;

        let modal_response = egui::Modal::new(egui::Id::new("add_quote_modal"))
            .backdrop_color(egui::Color32::from_black_alpha(120))
            .frame(theme::modal_frame())
            .show(ctx, |ui| {
                ui.set_width(420.0);

                // Title bar with close button
                ui.horizontal(|ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(format!(
                                "{} Create New Quote",
                                egui_phosphor::regular::PEN_NIB
                            ))
                            .size(theme::FONT_HEADING)
                            .strong(),
                        )
                        .selectable(false),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let close_size = 24.0;
                        let (rect, response) = ui.allocate_exact_size(
                            egui::vec2(close_size, close_size),
                            egui::Sense::click(),
                        );
                        let close_color = if response.hovered() {
                            ui.painter()
                                .rect_filled(rect, theme::RADIUS_DEFAULT, theme::BG_SURFACE);
                            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                            theme::STATUS_ERROR
                        } else {
                            theme::TEXT_DIM
                        };
                        ui.painter().text(
                            rect.center(),
                            egui::Align2::CENTER_CENTER,
                            egui_phosphor::regular::X,
                            egui::FontId::proportional(16.0),
                            close_color,
                        );
                        if response.clicked() {
                            close_requested = true;
                        }
                    });
                });
                ui.add_space(theme::SPACING_SM);
                ui.separator();
                ui.add_space(theme::SPACING_MD);

                if let Some(error) = &self.add_form.error {
                    components::error_banner(ui, error);
                    ui.add_space(theme::SPACING_MD);
                }

                let submitting = self.add_form.submitting;

                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Quote Text *")
                            .size(theme::FONT_LABEL)
                            .strong()
                            .color(theme::TEXT_SECONDARY),
                    )
                    .selectable(false),
                );
                theme::input_frame().show(ui, |ui| {
                    ui.add_enabled(
                        !submitting,
                        egui::TextEdit::multiline(&mut self.add_form.text)
                            .desired_rows(4)
                            .desired_width(ui.available_width())
                            .hint_text("Enter your inspirational quote...")
                            .frame(false),
                    );
                });

                ui.add_space(theme::SPACING_MD);

                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Author")
                            .size(theme::FONT_LABEL)
                            .strong()
                            .color(theme::TEXT_SECONDARY),
                    )
                    .selectable(false),
                );
                theme::input_frame().show(ui, |ui| {
                    ui.add_enabled(
                        !submitting,
                        egui::TextEdit::singleline(&mut self.add_form.author)
                            .desired_width(ui.available_width())
                            .hint_text("e.g., Mahatma Gandhi")
                            .frame(false),
                    );
                });
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Leave blank for \"Unknown\"")
                            .size(theme::FONT_SMALL)
                            .color(theme::TEXT_DIM),
                    )
                    .selectable(false),
                );

                ui.add_space(theme::SPACING_LG);

                ui.horizontal(|ui| {
                    if submitting {
                        ui.spinner();
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new("Creating...").color(theme::TEXT_MUTED),
                            )
                            .selectable(false),
                        );
                    } else {
                        let submit_label =
                            format!("{} Create Quote", egui_phosphor::regular::FLOPPY_DISK);
                        if ui.add(theme::button_accent(submit_label)).clicked() {
                            submit_requested = true;
                        }
                        if ui.add(theme::button("Cancel")).clicked() {
                            close_requested = true;
                        }
                    }
                });
            });

        if submit_requested {
            self.submit_new_quote(ctx);
        }
        if close_requested || modal_response.should_close() {
            self.close_add_modal();
        }
    }
}
