use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImgChannel { L, R, G, B, A }

#[derive(Clone)]
pub struct ImgLayer {
    mat: Matrix2D,
    channel: ImgChannel,
}

impl ImgLayer {
    pub fn new(mat: Matrix2D, channel: ImgChannel) -> Self {
        ImgLayer { mat, channel }
    }

    pub fn channel(&self) -> ImgChannel {
        self.channel
    }

    pub fn w(&self) -> usize {
        self.mat.w()
    }
    pub fn h(&self) -> usize {
        self.mat.h()
    }

    pub fn matrix(&self) -> &Matrix2D {
        &self.mat
    }

    pub fn matrix_mut(&mut self) -> &mut Matrix2D {
        &mut self.mat
    }
}

impl Index<usize> for ImgLayer {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.mat[index]
    }
}

impl Index<PixelPos> for ImgLayer {
    type Output = f64;

    fn index(&self, index: PixelPos) -> &Self::Output {
        &self.mat[index]
    }
}

impl IndexMut<PixelPos> for ImgLayer {
    fn index_mut(&mut self, index: PixelPos) -> &mut Self::Output {
        &mut self.mat[index]
    }
}

#[cfg(test)]
mod tests {
    use super::ImgLayer;
    use crate::img::{ImgChannel, Matrix2D};

    #[test]
    fn new_ctor() {
        const W: usize = 3;
        const H: usize = 4;

        let mat = Matrix2D::empty_with_size(W, H);
        let mat_copy = mat.clone();
        let mut layer = ImgLayer::new(mat, ImgChannel::A);

        assert_eq!(layer.channel(), ImgChannel::A);
        assert_eq!(layer.w(), W);
        assert_eq!(layer.h(), H);
        assert!(mat_copy.has_the_same_values_as(&layer.matrix()));
        assert!(mat_copy.has_the_same_values_as(&layer.matrix_mut()));
    }
}
