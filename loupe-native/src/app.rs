use std::sync::Arc;

use anyhow::Context;
use loupe_core::{Camera, CameraControl, InputSampler, InputState, Settings};
use winit::{
  application::ApplicationHandler,
  event::WindowEvent,
  event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
  window::{Fullscreen, Window, WindowId},
};

use crate::capture::Capture;
use crate::input;
use crate::renderer::Renderer;

pub fn run(capture: Capture, settings: Settings, windowed: bool) -> anyhow::Result<()>
{
  let event_loop = EventLoop::new().context("Failed to create event loop")?;
  let mut app = LoupeApp::new(capture, settings, windowed);

  event_loop.run_app(&mut app).context("Event loop failed")?;

  match app.failure.take()
  {
    Some(err) => Err(err),
    None => Ok(()),
  }
}

struct LoupeApp
{
  window: Option<Arc<Window>>,
  renderer: Option<Renderer>,

  // Dropped once uploaded to the GPU
  capture: Option<Capture>,

  camera: Camera,
  control: CameraControl,
  input: InputState,

  windowed: bool,
  failure: Option<anyhow::Error>,
}

impl LoupeApp
{
  fn new(capture: Capture, settings: Settings, windowed: bool) -> Self
  {
    Self {
      window: None,
      renderer: None,
      capture: Some(capture),
      camera: Camera::new(),
      control: CameraControl::new(settings),
      input: InputState::new(),
      windowed,
      failure: None,
    }
  }

  fn init_window_and_renderer(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()>
  {
    if self.window.is_some()
    {
      return Ok(());
    }

    let capture = self.capture.take().context("Capture already consumed")?;

    let mut attrs = Window::default_attributes().with_title("Loupe");
    if !self.windowed
    {
      attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
    }

    let window = Arc::new(event_loop.create_window(attrs).context("Failed to create window")?);

    let renderer = pollster::block_on(Renderer::new(
      window.clone(),
      &capture,
      &self.camera,
      self.control.settings(),
    ))?;

    let size = window.inner_size();
    log::info!("Window {}x{}, capture {}x{}", size.width, size.height, capture.width, capture.height);

    self.window = Some(window);
    self.renderer = Some(renderer);
    Ok(())
  }

  fn handle_window_event(&mut self, elwt: &ActiveEventLoop, window_id: WindowId, event: WindowEvent)
  {
    let window = match &self.window
    {
      Some(w) if w.id() == window_id => w,
      _ => return,
    };

    input::handle_event(&mut self.input, &event);

    match event
    {
      WindowEvent::CloseRequested =>
      {
        elwt.exit();
      }

      WindowEvent::Resized(size) =>
      {
        if size.width == 0 || size.height == 0
        {
          return;
        }

        if let Some(renderer) = &mut self.renderer
        {
          renderer.resize(size.width, size.height);
          renderer.update_camera(&self.camera);
        }

        window.request_redraw();
      }

      _ =>
      {}
    }
  }

  fn frame(&mut self, elwt: &ActiveEventLoop)
  {
    let (Some(window), Some(renderer)) = (&self.window, &mut self.renderer)
    else
    {
      return;
    };

    if self.input.key_pressed_this_tick(self.control.settings().quit_key)
    {
      elwt.exit();
      return;
    }

    self.control.update(&self.input, &mut self.camera);
    renderer.update_camera(&self.camera);

    if let Err(err) = renderer.render()
    {
      self.failure = Some(err);
      elwt.exit();
      return;
    }

    window.request_redraw();
    self.input.end_frame();
  }
}

impl ApplicationHandler for LoupeApp
{
  fn resumed(&mut self, event_loop: &ActiveEventLoop)
  {
    event_loop.set_control_flow(ControlFlow::Wait);

    if let Err(err) = self.init_window_and_renderer(event_loop)
    {
      self.failure = Some(err);
      event_loop.exit();
    }
  }

  fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent)
  {
    self.handle_window_event(event_loop, window_id, event);
  }

  fn about_to_wait(&mut self, event_loop: &ActiveEventLoop)
  {
    self.frame(event_loop);
  }
}
