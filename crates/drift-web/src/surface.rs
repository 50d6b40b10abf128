//! WebGL drawing-surface lifecycle: canvas creation, buffer uploads,
//! per-frame draw, resize, and teardown.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlCanvasElement, WebGlBuffer, WebGlProgram,
    WebGlRenderingContext as GL, WebGlShader, WebGlUniformLocation, Window,
};

use drift_engine::{model_matrix, Camera, ParticleField, Theme, FOG_DENSITY};

use crate::shaders::{FRAGMENT_SHADER_SOURCE, VERTEX_SHADER_SOURCE};

/// High-DPI canvases are capped at 2x to bound fill-rate cost.
const MAX_PIXEL_RATIO: f64 = 2.0;

struct Uniforms {
    view_projection: Option<WebGlUniformLocation>,
    model: Option<WebGlUniformLocation>,
    point_scale: Option<WebGlUniformLocation>,
    opacity: Option<WebGlUniformLocation>,
    fog_color: Option<WebGlUniformLocation>,
    fog_density: Option<WebGlUniformLocation>,
}

impl Uniforms {
    fn load(gl: &GL, program: &WebGlProgram) -> Self {
        let get = |name| gl.get_uniform_location(program, name);
        Self {
            view_projection: get("u_viewProjection"),
            model: get("u_model"),
            point_scale: get("u_pointScale"),
            opacity: get("u_opacity"),
            fog_color: get("u_fogColor"),
            fog_density: get("u_fogDensity"),
        }
    }
}

/// GPU-backed point-cloud surface attached to a container element.
pub struct Surface {
    gl: GL,
    canvas: HtmlCanvasElement,
    container: Element,
    program: WebGlProgram,
    uniforms: Uniforms,
    position_buffer: WebGlBuffer,
    color_buffer: WebGlBuffer,
}

impl Surface {
    /// Create a canvas inside the container element and set up the GL
    /// pipeline, uploading the field's initial buffers.
    ///
    /// A missing container is not an error: the backdrop runs headless
    /// and this returns `Ok(None)`.
    pub fn mount(
        window: &Window,
        container_id: &str,
        field: &ParticleField,
    ) -> Result<Option<Self>, JsValue> {
        let document = window.document().ok_or("failed to get document")?;
        let container = match document.get_element_by_id(container_id) {
            Some(element) => element,
            None => {
                log::warn!("container #{container_id} not found, backdrop not attached");
                return Ok(None);
            }
        };

        // Drop any stale canvas from a previous mount
        while let Some(child) = container.first_child() {
            container.remove_child(&child)?;
        }

        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        container.append_child(&canvas)?;

        let gl: GL = canvas
            .get_context("webgl")?
            .ok_or("WebGL is not supported")?
            .dyn_into()?;

        let program = create_program(&gl)?;
        gl.use_program(Some(&program));
        let uniforms = Uniforms::load(&gl, &program);

        let position_buffer =
            attribute_buffer(&gl, &program, "a_position", field.positions(), GL::DYNAMIC_DRAW)?;
        let color_buffer =
            attribute_buffer(&gl, &program, "a_color", field.colors(), GL::STATIC_DRAW)?;

        let surface = Self {
            gl,
            canvas,
            container,
            program,
            uniforms,
            position_buffer,
            color_buffer,
        };
        surface.apply_theme(field.theme());
        Ok(Some(surface))
    }

    /// Resize the canvas to the viewport and update the GL viewport.
    /// Does not touch the particle buffers.
    pub fn resize(&self, window: &Window, viewport_width: f32, viewport_height: f32) {
        let dpr = window.device_pixel_ratio().min(MAX_PIXEL_RATIO);
        let width = (viewport_width as f64 * dpr) as u32;
        let height = (viewport_height as f64 * dpr) as u32;
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.gl.viewport(0, 0, width as i32, height as i32);
    }

    /// Re-upload both buffers and reset theme-dependent GL state after a
    /// field rebuild.
    pub fn rebuild(&self, field: &ParticleField) {
        self.upload(&self.position_buffer, field.positions(), GL::DYNAMIC_DRAW);
        self.upload(&self.color_buffer, field.colors(), GL::STATIC_DRAW);
        self.apply_theme(field.theme());
    }

    /// Push the frame's positions and matrices and draw the point cloud.
    pub fn draw(&self, camera: &Camera, field: &ParticleField, particle_size: f32) {
        self.upload(&self.position_buffer, field.positions(), GL::DYNAMIC_DRAW);

        let view_projection: [f32; 16] = bytemuck::cast(camera.uniform());
        if let Some(loc) = &self.uniforms.view_projection {
            self.gl
                .uniform_matrix4fv_with_f32_array(Some(loc), false, &view_projection);
        }
        let model = model_matrix(field.rotation()).to_cols_array();
        if let Some(loc) = &self.uniforms.model {
            self.gl
                .uniform_matrix4fv_with_f32_array(Some(loc), false, &model);
        }
        self.set_uniform_1f(
            &self.uniforms.point_scale,
            particle_size * self.canvas.height() as f32 * 0.5,
        );

        self.gl.clear(GL::COLOR_BUFFER_BIT);
        self.gl.draw_arrays(GL::POINTS, 0, field.len() as i32);
    }

    /// Clear color, blend mode, and fog follow the theme.
    fn apply_theme(&self, theme: Theme) {
        let [r, g, b] = theme.background();
        self.gl.clear_color(r, g, b, 1.0);

        self.gl.enable(GL::BLEND);
        if theme.additive_blending() {
            self.gl.blend_func(GL::SRC_ALPHA, GL::ONE);
        } else {
            self.gl.blend_func(GL::SRC_ALPHA, GL::ONE_MINUS_SRC_ALPHA);
        }

        self.set_uniform_3f(&self.uniforms.fog_color, r, g, b);
        self.set_uniform_1f(&self.uniforms.fog_density, FOG_DENSITY);
        self.set_uniform_1f(&self.uniforms.opacity, theme.point_opacity());
    }

    /// Release GPU resources and detach the canvas.
    pub fn dispose(self) {
        self.gl.delete_buffer(Some(&self.position_buffer));
        self.gl.delete_buffer(Some(&self.color_buffer));
        self.gl.delete_program(Some(&self.program));
        if self.container.contains(Some(self.canvas.as_ref())) {
            let _ = self.container.remove_child(&self.canvas);
        }
    }

    fn upload(&self, buffer: &WebGlBuffer, data: &[f32], usage: u32) {
        self.gl.bind_buffer(GL::ARRAY_BUFFER, Some(buffer));

        unsafe {
            let view = js_sys::Float32Array::view(data);
            self.gl
                .buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &view, usage);
        }
    }

    #[inline]
    fn set_uniform_1f(&self, loc: &Option<WebGlUniformLocation>, v: f32) {
        if let Some(l) = loc {
            self.gl.uniform1f(Some(l), v);
        }
    }

    #[inline]
    fn set_uniform_3f(&self, loc: &Option<WebGlUniformLocation>, x: f32, y: f32, z: f32) {
        if let Some(l) = loc {
            self.gl.uniform3f(Some(l), x, y, z);
        }
    }
}

fn create_program(gl: &GL) -> Result<WebGlProgram, JsValue> {
    let vs = compile_shader(gl, GL::VERTEX_SHADER, VERTEX_SHADER_SOURCE)?;
    let fs = compile_shader(gl, GL::FRAGMENT_SHADER, FRAGMENT_SHADER_SOURCE)?;

    let program = gl.create_program().ok_or("failed to create program")?;
    gl.attach_shader(&program, &vs);
    gl.attach_shader(&program, &fs);
    gl.link_program(&program);

    if !gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        let info = gl.get_program_info_log(&program).unwrap_or_default();
        return Err(format!("link error: {info}").into());
    }
    Ok(program)
}

fn compile_shader(gl: &GL, shader_type: u32, source: &str) -> Result<WebGlShader, JsValue> {
    let shader = gl
        .create_shader(shader_type)
        .ok_or("failed to create shader")?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    if !gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        let info = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        return Err(format!("shader compilation error: {info}").into());
    }
    Ok(shader)
}

/// Create a stride-3 float attribute buffer and point the named shader
/// attribute at it.
fn attribute_buffer(
    gl: &GL,
    program: &WebGlProgram,
    name: &str,
    data: &[f32],
    usage: u32,
) -> Result<WebGlBuffer, JsValue> {
    let buffer = gl.create_buffer().ok_or("failed to create buffer")?;
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));

    unsafe {
        let view = js_sys::Float32Array::view(data);
        gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &view, usage);
    }

    let location = gl.get_attrib_location(program, name);
    if location >= 0 {
        let loc = location as u32;
        gl.enable_vertex_attrib_array(loc);
        gl.vertex_attrib_pointer_with_i32(loc, 3, GL::FLOAT, false, 0, 0);
    }
    Ok(buffer)
}
