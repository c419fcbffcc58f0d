//! 2D texture upload

use gl::types::{GLint, GLsizei, GLuint};

use crate::assets::ImageData;

/// RGBA8 texture with repeat wrapping, linear filtering and mipmaps
pub struct Texture2D {
    id: GLuint,
}

impl Texture2D {
    /// Upload `image` to a new texture object
    pub fn from_image(image: &ImageData) -> Self {
        debug_assert_eq!(image.data.len(), (image.width * image.height * 4) as usize);

        let mut id = 0;
        // SAFETY: `image.data` holds width * height RGBA8 texels.
        unsafe {
            gl::GenTextures(1, &mut id);
            gl::BindTexture(gl::TEXTURE_2D, id);

            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, gl::REPEAT as GLint);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, gl::REPEAT as GLint);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MIN_FILTER, gl::LINEAR as GLint);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MAG_FILTER, gl::LINEAR as GLint);

            gl::PixelStorei(gl::UNPACK_ALIGNMENT, 1);
            gl::TexImage2D(
                gl::TEXTURE_2D,
                0,
                gl::RGBA as GLint,
                image.width as GLsizei,
                image.height as GLsizei,
                0,
                gl::RGBA,
                gl::UNSIGNED_BYTE,
                image.data.as_ptr().cast(),
            );
            gl::GenerateMipmap(gl::TEXTURE_2D);
        }

        log::info!("Uploaded texture {} ({}x{})", id, image.width, image.height);
        Self { id }
    }

    /// 1×1 opaque white texture, a neutral stand-in when the wall image is missing
    pub fn white() -> Self {
        Self::from_image(&ImageData::solid_color(1, 1, [255, 255, 255, 255]))
    }

    /// Bind to texture unit 0
    pub fn bind(&self) {
        // SAFETY: the texture is owned by this wrapper.
        unsafe {
            gl::ActiveTexture(gl::TEXTURE0);
            gl::BindTexture(gl::TEXTURE_2D, self.id);
        }
    }
}

impl Drop for Texture2D {
    fn drop(&mut self) {
        // SAFETY: the texture is owned by this wrapper.
        unsafe { gl::DeleteTextures(1, &self.id) };
    }
}
