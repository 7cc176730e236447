use std::path::PathBuf;

use chrono::Local;
use fltk::{app, enums::{Color, Event, Font, Key}, prelude::*, window};

use crate::img::{color_ops, histogram::Histogram, Img};
use crate::my_err::{ErrorKind, MyError};
use crate::my_ui::{
    hist_view::MyHistView,
    img_presenter::MyImgPresenter,
    small_dlg::show_err_msg,
    usual::{MyButton, MyLabel},
    BTN_H, BTN_W, HIST_H, HIST_W,
};
use crate::utils::Pos;

pub const FONT_PATH: &str = "assets/arial.ttf";
pub const OUTPUT_FILE_NAME: &str = "output_image.png";

#[derive(Debug, Copy, Clone)]
enum Msg {
    ToggleView,
    SaveActive,
}

pub fn create_app(img_path: PathBuf) -> Result<(), MyError> {
    let app = app::App::default();

    let img = Img::load_as_rgb(img_path)?;
    let gray = color_ops::rgb_to_gray(&img);
    let equalized = color_ops::equalize_hist(&gray)?;

    let font_name = app.load_font(FONT_PATH)
        .map_err(|err| MyError::new(
            ErrorKind::ResourceMissing,
            format!("Не удалось загрузить шрифт '{}': {}", FONT_PATH, err)))?;
    let font = Font::by_name(&font_name);

    let (tx_ui, rx_ui) = app::channel::<Msg>();

    let mut wind_main = window::Window::default()
        .with_size(gray.w() as i32, gray.h() as i32)
        .with_label("Изображение");
    let mut img_presenter = MyImgPresenter::new(0, 0, gray.w() as i32, gray.h() as i32);
    wind_main.end();
    wind_main.show();

    let mut wind_hist = window::Window::default()
        .with_size(HIST_W, HIST_H)
        .with_label("Гистограмма");

    let mut hist_view = MyHistView::new(0, 0, HIST_W, HIST_H);

    let mut btn_toggle = MyButton::new((HIST_W - BTN_W) / 2, 10, BTN_W, BTN_H, "Эквализировать");
    btn_toggle.set_emit(tx_ui, Msg::ToggleView);

    let mut lbl_brightness = MyLabel::new(10, HIST_H - 80, HIST_W - 20, 24, "");
    lbl_brightness.set_font(font, 16);
    lbl_brightness.set_text_color(Color::Yellow);

    let mut lbl_contrast = MyLabel::new(10, HIST_H - 50, HIST_W - 20, 24, "");
    lbl_contrast.set_font(font, 16);
    lbl_contrast.set_text_color(Color::Yellow);

    wind_hist.end();
    wind_hist.set_pos(wind_main.x() + wind_main.w(), wind_main.y());
    wind_hist.show();

    // closing any of the windows exits the message loop
    wind_main.set_callback(|_| app::quit());
    wind_hist.set_callback(|_| app::quit());

    // key S saves the currently shown image
    wind_main.handle(move |_, ev| match ev {
        Event::KeyDown if app::event_key() == Key::from_char('s') => {
            tx_ui.send(Msg::SaveActive);
            true
        },
        _ => false
    });
    wind_hist.handle(move |_, ev| match ev {
        Event::KeyDown if app::event_key() == Key::from_char('s') => {
            tx_ui.send(Msg::SaveActive);
            true
        },
        _ => false
    });

    show_view(&gray, &mut img_presenter, &mut hist_view, &mut lbl_brightness, &mut lbl_contrast)?;

    let mut is_equalized = false;

    while app.wait() {
        if let Some(msg) = rx_ui.recv() {
            let handled = match msg {
                Msg::ToggleView => {
                    is_equalized = !is_equalized;

                    let (active, btn_label) = if is_equalized {
                        (&equalized, "Оригинал")
                    } else {
                        (&gray, "Эквализировать")
                    };

                    btn_toggle.set_label(btn_label);
                    show_view(active, &mut img_presenter, &mut hist_view, &mut lbl_brightness, &mut lbl_contrast)
                },
                Msg::SaveActive => {
                    let active = if is_equalized { &equalized } else { &gray };
                    save_active(active)
                },
            };

            if let Err(err) = handled {
                let center = Pos::new(
                    wind_hist.x() + wind_hist.w() / 2,
                    wind_hist.y() + wind_hist.h() / 2);
                show_err_msg(center, err);
            }
        }
    }

    Ok(())
}

fn show_view(
    img: &Img,
    img_presenter: &mut MyImgPresenter,
    hist_view: &mut MyHistView,
    lbl_brightness: &mut MyLabel,
    lbl_contrast: &mut MyLabel,
) -> Result<(), MyError> {
    img_presenter.set_image(img)?;

    let hist = Histogram::count_layer(img.layer(0).matrix())?;
    let stats = hist.statistics();

    hist_view.set_hist(&hist);
    lbl_brightness.set_text(&stats.brightness().get_description());
    lbl_contrast.set_text(&stats.contrast().get_description());

    Ok(())
}

fn save_active(img: &Img) -> Result<(), MyError> {
    img.try_save(OUTPUT_FILE_NAME)?;

    println!("[{}] Изображение сохранено в {}",
        Local::now().format("%H:%M:%S"),
        OUTPUT_FILE_NAME);

    Ok(())
}
