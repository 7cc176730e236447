use fltk::{app::Sender, button, enums::{Align, Color, Event, Font}, frame, prelude::{WidgetBase, WidgetExt}};


pub struct MyButton {
    btn: button::Button,
}

impl MyButton {
    pub fn new(x: i32, y: i32, w: i32, h: i32, label: &str) -> Self {
        let mut btn = button::Button::default()
            .with_pos(x, y)
            .with_size(w, h);
        btn.set_label(label);
        btn.set_color(Color::from_rgb(0, 0, 255));
        btn.set_selection_color(Color::from_rgb(0, 0, 180));
        btn.set_label_color(Color::White);

        btn.handle(|b, ev| match ev {
            Event::Enter => {
                b.set_color(Color::from_rgb(100, 149, 237));
                b.redraw();
                true
            },
            Event::Leave => {
                b.set_color(Color::from_rgb(0, 0, 255));
                b.redraw();
                true
            },
            _ => false
        });

        MyButton { btn }
    }

    pub fn set_emit<TMsg>(&mut self, sender: Sender<TMsg>, msg: TMsg)
        where TMsg: 'static + Clone + Copy + Send + Sync
    {
        self.btn.emit(sender, msg);
    }

    pub fn set_label(&mut self, label: &str) {
        self.btn.set_label(label);
        self.btn.redraw_label();
    }
}


pub struct MyLabel {
    label: frame::Frame,
}

impl MyLabel {
    pub fn new(x: i32, y: i32, w: i32, h: i32, text: &str) -> Self {
        let mut label = frame::Frame::default()
            .with_pos(x, y)
            .with_size(w, h);
        label.set_label(text);
        label.set_align(Align::Left | Align::Inside);

        MyLabel { label }
    }

    pub fn set_font(&mut self, font: Font, size: i32) {
        self.label.set_label_font(font);
        self.label.set_label_size(size);
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.label.set_label_color(color);
    }

    pub fn set_text(&mut self, text: &str) {
        self.label.set_label(text);
        self.label.redraw_label();
    }
}
