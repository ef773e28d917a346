pub mod shader;

use gl::types::*;
use glam::Vec3;
use std::f32::consts::TAU;
use std::mem;
use std::ptr;

use crate::sim::math::point_on_circle;
use shader::ShaderProgram;

const VERT_SRC: &str = include_str!("../../shaders/debug.vert");
const FRAG_SRC: &str = include_str!("../../shaders/debug.frag");

const CIRCLE_SEGMENTS: usize = 48;

/// Immediate-style debug renderer: lines and circle outlines in normalized
/// viewport coordinates, color passed explicitly per draw call.
pub struct DebugRenderer {
    shader: ShaderProgram,
    vao: GLuint,
    vbo: GLuint,
    scratch: Vec<f32>,
}

impl DebugRenderer {
    pub fn init() -> Self {
        unsafe {
            gl::ClearColor(0.0, 0.0, 0.0, 1.0);
        }

        let shader =
            ShaderProgram::from_sources(VERT_SRC, FRAG_SRC).expect("Failed to compile shaders");

        let mut vao = 0;
        let mut vbo = 0;
        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::GenBuffers(1, &mut vbo);

            gl::BindVertexArray(vao);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);

            let stride = 3 * mem::size_of::<f32>() as GLsizei;
            gl::VertexAttribPointer(0, 3, gl::FLOAT, gl::FALSE, stride, ptr::null());
            gl::EnableVertexAttribArray(0);

            gl::BindVertexArray(0);
        }

        Self {
            shader,
            vao,
            vbo,
            scratch: Vec::new(),
        }
    }

    pub fn begin_frame(&mut self) {
        unsafe {
            gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);
        }
        self.shader.bind();
    }

    pub fn line(&mut self, a: Vec3, b: Vec3, color: Vec3) {
        self.scratch.clear();
        self.scratch.extend_from_slice(&[a.x, a.y, a.z]);
        self.scratch.extend_from_slice(&[b.x, b.y, b.z]);
        self.submit(gl::LINES, color);
    }

    pub fn circle(&mut self, center: Vec3, radius: f32, color: Vec3) {
        self.scratch.clear();
        for i in 0..CIRCLE_SEGMENTS {
            let angle = TAU * i as f32 / CIRCLE_SEGMENTS as f32;
            let p = center + point_on_circle(angle, radius);
            self.scratch.extend_from_slice(&[p.x, p.y, p.z]);
        }
        self.submit(gl::LINE_LOOP, color);
    }

    fn submit(&mut self, mode: GLenum, color: Vec3) {
        self.shader.set_vec3("u_color", color);
        unsafe {
            gl::BindVertexArray(self.vao);
            gl::BindBuffer(gl::ARRAY_BUFFER, self.vbo);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                (self.scratch.len() * mem::size_of::<f32>()) as GLsizeiptr,
                self.scratch.as_ptr() as *const _,
                gl::DYNAMIC_DRAW,
            );
            gl::DrawArrays(mode, 0, (self.scratch.len() / 3) as GLsizei);
            gl::BindVertexArray(0);
        }
    }
}

impl Drop for DebugRenderer {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, &self.vao);
            gl::DeleteBuffers(1, &self.vbo);
        }
    }
}
