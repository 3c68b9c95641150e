use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;

use gtk4::prelude::*;
use gtk4::{
    Align, Application, ApplicationWindow, Box as GtkBox, Button, DrawingArea, Label, Orientation,
};

use crate::config::AppConfig;
use crate::notification::DesktopNotifier;
use crate::palette::swatches;
use crate::render::{DotMarker, SwatchView, SWATCH_SIZE};

use super::DrawingApp;

const APP_ID: &str = "io.github.dotpad.Dotpad";
const WINDOW_WIDTH: i32 = 360;
const WINDOW_HEIGHT: i32 = 640;
const CONTROLS_SPACING: i32 = 10;

type SharedDrawingApp = Rc<RefCell<DrawingApp<DesktopNotifier>>>;

pub fn run_window(config: AppConfig) -> gtk4::glib::ExitCode {
    let app = Application::builder().application_id(APP_ID).build();
    app.connect_activate(move |app| build_window(app, &config));
    app.run_with_args::<&str>(&[])
}

fn build_window(app: &Application, config: &AppConfig) {
    let drawing: SharedDrawingApp = Rc::new(RefCell::new(DrawingApp::new(config, DesktopNotifier)));

    let canvas = DrawingArea::new();
    canvas.set_hexpand(true);
    canvas.set_vexpand(true);
    let draw_state = drawing.clone();
    canvas.set_draw_func(move |_, context, _, _| {
        context.set_source_rgb(1.0, 1.0, 1.0);
        if let Err(err) = context.paint() {
            tracing::warn!(?err, "paint canvas background failed");
            return;
        }
        for marker in draw_state.borrow().markers() {
            draw_marker(context, &marker);
        }
    });
    connect_draw_gesture(&canvas, &drawing);

    let status = Label::new(None);
    status.set_halign(Align::Start);
    let controls = build_controls(&canvas, &drawing, &status);

    let root = GtkBox::new(Orientation::Vertical, 0);
    root.append(&canvas);
    root.append(&controls);
    root.append(&status);

    let window = ApplicationWindow::builder()
        .application(app)
        .title("Dotpad")
        .default_width(WINDOW_WIDTH)
        .default_height(WINDOW_HEIGHT)
        .child(&root)
        .build();
    window.present();
}

fn draw_marker(context: &gtk4::cairo::Context, marker: &DotMarker) {
    let (r, g, b) = marker.color.rgb().rgb_f64();
    let (cx, cy) = marker.center();
    context.set_source_rgb(r, g, b);
    context.arc(cx, cy, marker.size / 2.0, 0.0, TAU);
    if let Err(err) = context.fill() {
        tracing::warn!(?err, "fill dot marker failed");
    }
}

fn connect_draw_gesture(canvas: &DrawingArea, drawing: &SharedDrawingApp) {
    let gesture = gtk4::GestureDrag::new();
    gesture.set_button(gtk4::gdk::BUTTON_PRIMARY);
    let origin = Rc::new(Cell::new((0.0_f64, 0.0_f64)));

    let begin_drawing = drawing.clone();
    let begin_origin = origin.clone();
    gesture.connect_drag_begin(move |_, start_x, start_y| {
        begin_origin.set((start_x, start_y));
        begin_drawing.borrow_mut().on_gesture_start();
    });

    let update_drawing = drawing.clone();
    let update_origin = origin.clone();
    let update_canvas = canvas.clone();
    gesture.connect_drag_update(move |_, offset_x, offset_y| {
        let (start_x, start_y) = update_origin.get();
        update_drawing
            .borrow_mut()
            .on_gesture_move(start_x + offset_x, start_y + offset_y);
        update_canvas.queue_draw();
    });

    let end_drawing = drawing.clone();
    gesture.connect_drag_end(move |_, _, _| {
        end_drawing.borrow_mut().on_gesture_end();
    });

    canvas.add_controller(gesture);
}

fn build_controls(canvas: &DrawingArea, drawing: &SharedDrawingApp, status: &Label) -> GtkBox {
    let controls = GtkBox::new(Orientation::Horizontal, CONTROLS_SPACING);
    controls.set_halign(Align::Center);
    controls.set_margin_top(CONTROLS_SPACING);
    controls.set_margin_bottom(CONTROLS_SPACING);

    let swatch_areas = Rc::new(RefCell::new(Vec::<DrawingArea>::new()));
    for (index, &swatch) in swatches().iter().enumerate() {
        let area = DrawingArea::new();
        area.set_content_width(SWATCH_SIZE);
        area.set_content_height(SWATCH_SIZE);
        let view_state = drawing.clone();
        area.set_draw_func(move |_, context, width, height| {
            if let Some(view) = view_state.borrow().swatch_views().get(index) {
                draw_swatch(context, view, width, height);
            }
        });

        let button = Button::new();
        button.add_css_class("flat");
        button.set_focus_on_click(false);
        button.set_tooltip_text(Some(&swatch.tooltip()));
        button.set_child(Some(&area));

        let press_drawing = drawing.clone();
        let press_areas = swatch_areas.clone();
        let press_canvas = canvas.clone();
        button.connect_clicked(move |_| {
            press_drawing.borrow_mut().on_swatch_pressed(swatch);
            for area in press_areas.borrow().iter() {
                area.queue_draw();
            }
            press_canvas.queue_draw();
        });

        swatch_areas.borrow_mut().push(area);
        controls.append(&button);
    }

    let export_button = Button::with_label("Export");
    export_button.set_visible(drawing.borrow().export_enabled());
    let export_drawing = drawing.clone();
    let export_status = status.clone();
    export_button.connect_clicked(move |_| match export_drawing.borrow().export() {
        Ok(exported) => {
            export_status.set_text(exported.summary());
        }
        Err(err) => {
            tracing::error!(%err, "export failed");
            export_status.set_text(&format!("Export failed: {err}"));
        }
    });
    controls.append(&export_button);

    controls
}

fn draw_swatch(context: &gtk4::cairo::Context, view: &SwatchView, width: i32, height: i32) {
    let border = f64::from(view.border_width);
    let cx = f64::from(width) / 2.0;
    let cy = f64::from(height) / 2.0;
    let radius = (f64::from(width.min(height)) - border) / 2.0;

    let (r, g, b) = view.fill.rgb_f64();
    context.set_source_rgb(r, g, b);
    context.arc(cx, cy, radius, 0.0, TAU);
    if let Err(err) = context.fill_preserve() {
        tracing::warn!(?err, "fill swatch failed");
        return;
    }

    let (r, g, b) = view.border.rgb_f64();
    context.set_source_rgb(r, g, b);
    context.set_line_width(border);
    if let Err(err) = context.stroke() {
        tracing::warn!(?err, "stroke swatch border failed");
        return;
    }

    if let Some(label) = view.label {
        context.set_source_rgb(0.0, 0.0, 0.0);
        context.set_font_size(16.0);
        if let Ok(extents) = context.text_extents(label) {
            context.move_to(
                cx - extents.width() / 2.0 - extents.x_bearing(),
                cy - extents.height() / 2.0 - extents.y_bearing(),
            );
        }
        if let Err(err) = context.show_text(label) {
            tracing::warn!(?err, "draw eraser label failed");
        }
    }
}
