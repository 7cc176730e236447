use super::*;


pub const BRIGHTNESS_DARK_MAX: f64 = 64.0;
pub const BRIGHTNESS_MEDIUM_MAX: f64 = 128.0;
pub const BRIGHTNESS_MEDIUM_LIGHT_MAX: f64 = 192.0;

pub const CONTRAST_LOW_MAX: f64 = 50.0;
pub const CONTRAST_MEDIUM_MAX: f64 = 100.0;


#[derive(Clone)]
pub struct Histogram {
    counts: [u32; PIXEL_VALUES_COUNT],
    total: u32,
}

impl Histogram {
    pub fn count_layer(layer: &Matrix2D) -> result::Result<Histogram, MyError> {
        if layer.w() * layer.h() == 0 {
            return Err(MyError::new(
                ErrorKind::InvalidInput,
                "Гистограмма не определена для изображения без пикселей".to_string()));
        }

        let mut counts = [0_u32; PIXEL_VALUES_COUNT];

        for pos in layer.get_pixels_iter() {
            let pix_value = layer[pos] as u8 as usize;
            counts[pix_value] += 1;
        }

        let total = (layer.w() * layer.h()) as u32;

        Ok(Histogram { counts, total })
    }

    pub fn counts(&self) -> &[u32; PIXEL_VALUES_COUNT] {
        &self.counts
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn max_count(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    pub fn cdf(&self) -> [u32; PIXEL_VALUES_COUNT] {
        let mut cdf = [0_u32; PIXEL_VALUES_COUNT];

        let mut sum = 0_u32;
        for (bin, count) in cdf.iter_mut().zip(self.counts.iter()) {
            sum += *count;
            *bin = sum;
        }

        cdf
    }

    pub fn statistics(&self) -> Statistics {
        let total = self.total as f64;

        let mut sum = 0_f64;
        for (value, count) in self.counts.iter().enumerate() {
            sum += value as f64 * *count as f64;
        }
        let mean = sum / total;

        let mut sum_sq = 0_f64;
        for (value, count) in self.counts.iter().enumerate() {
            let diff = value as f64 - mean;
            sum_sq += diff * diff * *count as f64;
        }
        let std_dev = (sum_sq / total).sqrt();

        Statistics { mean, std_dev }
    }
}


#[derive(Debug, Clone, Copy)]
pub struct Statistics {
    pub mean: f64,
    pub std_dev: f64,
}

impl Statistics {
    pub fn brightness(&self) -> Brightness {
        if self.mean < BRIGHTNESS_DARK_MAX {
            Brightness::Dark
        } else if self.mean < BRIGHTNESS_MEDIUM_MAX {
            Brightness::Medium
        } else if self.mean < BRIGHTNESS_MEDIUM_LIGHT_MAX {
            Brightness::MediumLight
        } else {
            Brightness::Light
        }
    }

    pub fn contrast(&self) -> Contrast {
        if self.std_dev < CONTRAST_LOW_MAX {
            Contrast::Low
        } else if self.std_dev < CONTRAST_MEDIUM_MAX {
            Contrast::Medium
        } else {
            Contrast::High
        }
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brightness { Dark, Medium, MediumLight, Light }

impl Brightness {
    pub fn get_description(&self) -> String {
        match self {
            Brightness::Dark => "Тёмное изображение",
            Brightness::Medium => "Изображение средней яркости",
            Brightness::MediumLight => "Умеренно светлое изображение",
            Brightness::Light => "Светлое изображение",
        }.to_string()
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contrast { Low, Medium, High }

impl Contrast {
    pub fn get_description(&self) -> String {
        match self {
            Contrast::Low => "Низкий контраст",
            Contrast::Medium => "Средний контраст",
            Contrast::High => "Высокий контраст",
        }.to_string()
    }
}


#[cfg(test)]
mod tests {
    use super::{Brightness, Contrast, Histogram, Statistics};
    use crate::img::{Matrix2D, PIXEL_VALUES_COUNT};
    use crate::my_err::ErrorKind;

    fn layer_with_values(w: usize, h: usize, values: &[f64]) -> Matrix2D {
        assert_eq!(values.len(), w * h);

        let mut mat = Matrix2D::empty_with_size(w, h);
        for (pix_num, value) in values.iter().enumerate() {
            mat[pix_num] = *value;
        }
        mat
    }

    #[test]
    fn counts_sum_equals_pixels_count() {
        let mat = layer_with_values(3, 2, &[0.0, 17.0, 17.0, 255.0, 128.0, 128.0]);

        let hist = Histogram::count_layer(&mat).unwrap();

        assert_eq!(hist.total(), 6);
        assert_eq!(hist.counts().iter().sum::<u32>(), 6);
        assert_eq!(hist.counts()[17], 2);
        assert_eq!(hist.counts()[128], 2);
        assert_eq!(hist.counts()[0], 1);
        assert_eq!(hist.counts()[255], 1);
    }

    #[test]
    fn zero_pixels_layer_is_invalid_input() {
        let mat = Matrix2D::empty_with_size(0, 0);

        let err = Histogram::count_layer(&mat).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn statistics_of_bimodal_layer() {
        let mat = layer_with_values(2, 2, &[0.0, 0.0, 255.0, 255.0]);

        let stats = Histogram::count_layer(&mat).unwrap().statistics();

        assert_eq!(stats.mean, 127.5);
        assert_eq!(stats.std_dev, 127.5);
    }

    #[test]
    fn statistics_do_not_depend_on_pixels_order() {
        let values = [3.0, 250.0, 17.0, 99.0, 99.0, 180.0];
        let mut values_shuffled = values;
        values_shuffled.reverse();
        values_shuffled.swap(1, 3);

        let stats1 = Histogram::count_layer(&layer_with_values(3, 2, &values))
            .unwrap()
            .statistics();
        let stats2 = Histogram::count_layer(&layer_with_values(2, 3, &values_shuffled))
            .unwrap()
            .statistics();

        assert_eq!(stats1.mean, stats2.mean);
        assert_eq!(stats1.std_dev, stats2.std_dev);
    }

    #[test]
    fn cdf_is_monotone_and_ends_with_total() {
        let mat = layer_with_values(2, 2, &[0.0, 0.0, 255.0, 255.0]);
        let hist = Histogram::count_layer(&mat).unwrap();

        let cdf = hist.cdf();

        for wnd in cdf.windows(2) {
            assert!(wnd[0] <= wnd[1]);
        }
        assert_eq!(cdf[0], 2);
        assert_eq!(cdf[254], 2);
        assert_eq!(cdf[PIXEL_VALUES_COUNT - 1], hist.total());
    }

    #[test]
    fn brightness_bands_are_contiguous() {
        let stats = |mean: f64| Statistics { mean, std_dev: 0.0 };

        assert_eq!(stats(0.0).brightness(), Brightness::Dark);
        assert_eq!(stats(63.9).brightness(), Brightness::Dark);
        assert_eq!(stats(64.0).brightness(), Brightness::Medium);
        assert_eq!(stats(127.9).brightness(), Brightness::Medium);
        assert_eq!(stats(128.0).brightness(), Brightness::MediumLight);
        assert_eq!(stats(191.9).brightness(), Brightness::MediumLight);
        assert_eq!(stats(192.0).brightness(), Brightness::Light);
        assert_eq!(stats(255.0).brightness(), Brightness::Light);
    }

    #[test]
    fn contrast_bands_are_contiguous() {
        let stats = |std_dev: f64| Statistics { mean: 0.0, std_dev };

        assert_eq!(stats(0.0).contrast(), Contrast::Low);
        assert_eq!(stats(49.9).contrast(), Contrast::Low);
        assert_eq!(stats(50.0).contrast(), Contrast::Medium);
        assert_eq!(stats(99.9).contrast(), Contrast::Medium);
        assert_eq!(stats(100.0).contrast(), Contrast::High);
        assert_eq!(stats(200.0).contrast(), Contrast::High);
    }
}
