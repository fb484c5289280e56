//! Triangle demo application
//!
//! Opens a GLFW window with an OpenGL 3.3 core context, uploads a colored
//! triangle into a registered mesh and draws it every frame.
//!
//! Usage: `triangle [config.toml|config.ron]`
//!
//! Keys: `1`-`6` switch the primitive type, `Escape` quits.

use glfw::{Action, Context as _, Key, WindowEvent};
use glow::HasContext;
use thiserror::Error;

use graphics::config::{Config, ConfigError};
use graphics::core::config::GraphicsConfig;
use graphics::foundation::logging;
use graphics::render::{create_mesh, ColorVertex, MeshError, OpenGl, PrimitiveType};
use graphics::assets::ResourceManagers;

const VERTEX_SHADER: &str = r"#version 330 core
layout(location = 0) in vec3 a_position;
layout(location = 1) in vec4 a_color;
out vec4 v_color;
void main() {
    v_color = a_color;
    gl_Position = vec4(a_position, 1.0);
}
";

const FRAGMENT_SHADER: &str = r"#version 330 core
in vec4 v_color;
out vec4 frag_color;
void main() {
    frag_color = v_color;
}
";

/// Demo application errors
#[derive(Error, Debug)]
enum AppError {
    #[error("GLFW initialization failed: {0}")]
    Glfw(String),

    #[error("Window creation failed")]
    WindowCreation,

    #[error("Shader error: {0}")]
    Shader(String),

    #[error("Mesh error: {0}")]
    Mesh(#[from] MeshError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

fn load_config() -> Result<GraphicsConfig, AppError> {
    let config = match std::env::args().nth(1) {
        Some(path) => GraphicsConfig::load_from_file(&path)?,
        None => GraphicsConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

/// Compile and link the demo's color shader
///
/// # Safety
/// `gl` must be current on this thread.
unsafe fn compile_program(gl: &glow::Context) -> Result<glow::Program, AppError> {
    let program = gl.create_program().map_err(AppError::Shader)?;

    let mut shaders = Vec::with_capacity(2);
    for (kind, source) in [(glow::VERTEX_SHADER, VERTEX_SHADER), (glow::FRAGMENT_SHADER, FRAGMENT_SHADER)] {
        let shader = gl.create_shader(kind).map_err(AppError::Shader)?;
        gl.shader_source(shader, source);
        gl.compile_shader(shader);
        if !gl.get_shader_compile_status(shader) {
            let log = gl.get_shader_info_log(shader);
            gl.delete_shader(shader);
            gl.delete_program(program);
            return Err(AppError::Shader(log));
        }
        gl.attach_shader(program, shader);
        shaders.push(shader);
    }

    gl.link_program(program);
    for shader in shaders {
        gl.detach_shader(program, shader);
        gl.delete_shader(shader);
    }

    if !gl.get_program_link_status(program) {
        let log = gl.get_program_info_log(program);
        gl.delete_program(program);
        return Err(AppError::Shader(log));
    }
    Ok(program)
}

const fn primitive_for_key(key: Key) -> Option<PrimitiveType> {
    match key {
        Key::Num1 => Some(PrimitiveType::TriangleList),
        Key::Num2 => Some(PrimitiveType::TriangleStrip),
        Key::Num3 => Some(PrimitiveType::TriangleFan),
        Key::Num4 => Some(PrimitiveType::LineList),
        Key::Num5 => Some(PrimitiveType::LineStrip),
        Key::Num6 => Some(PrimitiveType::PointList),
        _ => None,
    }
}

fn run() -> Result<(), AppError> {
    let config = load_config()?;
    logging::init_with_level(&config.log_level);
    log::info!("Starting triangle demo with {:?}", config);

    let mut glfw = glfw::init(glfw::fail_on_errors).map_err(|e| AppError::Glfw(format!("{:?}", e)))?;
    glfw.window_hint(glfw::WindowHint::ContextVersion(3, 3));
    glfw.window_hint(glfw::WindowHint::OpenGlProfile(glfw::OpenGlProfileHint::Core));
    glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));

    let (mut window, events) = glfw
        .create_window(800, 600, "Graphics - Triangle Demo", glfw::WindowMode::Windowed)
        .ok_or(AppError::WindowCreation)?;
    window.make_current();
    window.set_key_polling(true);
    window.set_framebuffer_size_polling(true);

    // SAFETY: the window's context was made current on this thread above and
    // outlives `gl`, every mesh, and the program (all are released before return).
    let gl = unsafe {
        OpenGl::from_loader_function(|name| window.get_proc_address(name) as *const _, &config)
    };
    let program = unsafe { compile_program(gl.context())? };

    let mut managers = ResourceManagers::new();
    let triangle = create_mesh(&gl, &mut managers)?;
    if let Some(mesh) = managers.meshes.get_mut(triangle) {
        mesh.set_dynamic(false);
        mesh.set_vertices(&[
            ColorVertex::new([-0.6, -0.5, 0.0], [255, 64, 64, 255]),
            ColorVertex::new([0.6, -0.5, 0.0], [64, 255, 64, 255]),
            ColorVertex::new([0.0, 0.6, 0.0], [64, 64, 255, 255]),
        ])?;
    }

    while !window.should_close() {
        glfw.poll_events();
        for (_, event) in glfw::flush_messages(&events) {
            match event {
                WindowEvent::Key(Key::Escape, _, Action::Press, _) => window.set_should_close(true),
                WindowEvent::Key(key, _, Action::Press, _) => {
                    if let (Some(primitive), Some(mesh)) =
                        (primitive_for_key(key), managers.meshes.get_mut(triangle))
                    {
                        log::info!("Switching primitive type to {:?}", primitive);
                        mesh.set_primitive_type(primitive);
                    }
                }
                WindowEvent::FramebufferSize(width, height) => unsafe {
                    gl.context().viewport(0, 0, width, height);
                },
                _ => {}
            }
        }

        unsafe {
            gl.context().clear_color(0.1, 0.1, 0.12, 1.0);
            gl.context().clear(glow::COLOR_BUFFER_BIT);
            gl.context().use_program(Some(program));
        }
        if let Some(mesh) = managers.meshes.get(triangle) {
            mesh.draw();
        }

        window.swap_buffers();
        managers.garbage_collect();
    }

    managers.meshes.release(triangle).ok();
    managers.clear();
    unsafe { gl.context().delete_program(program) };
    log::info!("Triangle demo finished");
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        log::error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
