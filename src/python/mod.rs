use pyo3::prelude::*;
use std::sync::Arc;
use std::thread::JoinHandle;

use crate::drive::arbiter::OverrideButtons;
use crate::drive::controller::{compute_frame, DriveController};
use crate::drive::input::InputSnapshot;
use crate::drive::mapper::SpeedMapper;
use crate::serial::frame::CommandFrame;

#[pyclass]
pub struct PyDriveController{
    inner: Arc<DriveController>,
    worker: Option<JoinHandle<()>>,
}

#[pymethods]
impl PyDriveController{
    #[new]
    #[pyo3(signature = (port, baud=9600))]
    fn new(port: &str, baud: u32) -> Self{
        PyDriveController{
            inner: Arc::new(DriveController::new(port).with_baud(baud)),
            worker: None,
        }
    }

    /// Open the port and start streaming frames on a background thread.
    fn start(&mut self) -> bool{
        if self.worker.is_some(){
            return false;
        }
        self.worker = Some(Arc::clone(&self.inner).start_background());
        true
    }

    fn shutdown(&mut self){
        self.inner.shutdown();
        if let Some(worker) = self.worker.take(){
            let _ = worker.join();
        }
    }

    fn set_axes(&self, x: i32, y: i32){
        self.inner.set_axes(x, y);
    }

    fn set_forward(&self, pressed: bool){
        self.inner.set_forward(pressed);
    }

    fn set_backward(&self, pressed: bool){
        self.inner.set_backward(pressed);
    }

    fn set_left(&self, pressed: bool){
        self.inner.set_left(pressed);
    }

    fn set_right(&self, pressed: bool){
        self.inner.set_right(pressed);
    }

    /// Center the stick and release every override line.
    fn stop(&self){
        self.inner.stop();
    }

    /// (right, left) speeds the current inputs would produce this tick.
    fn preview(&self) -> (i32, i32){
        let frame = self.inner.preview_frame();
        (frame.right, frame.left)
    }
}

/// Pure mapping: axis readings and override lines in, (right, left) out.
#[pyfunction]
#[pyo3(signature = (x, y, forward=false, backward=false, left=false, right=false))]
fn compute_speeds(x: i32, y: i32, forward: bool, backward: bool, left: bool, right: bool) -> (i32, i32){
    let input = InputSnapshot{
        x,
        y,
        buttons: OverrideButtons{ forward, backward, left, right },
    };
    let frame = compute_frame(&SpeedMapper::default(), &input);
    (frame.right, frame.left)
}

/// Wire bytes for one frame, exactly as the controller emits them.
#[pyfunction]
fn format_frame(right: i32, left: i32) -> Vec<u8>{
    CommandFrame::new(right, left).to_bytes()
}

#[pymodule]
fn rover_drive(_py: Python, m: &PyModule) -> PyResult<()>{
    m.add_class::<PyDriveController>()?;
    m.add_function(wrap_pyfunction!(compute_speeds, m)?)?;
    m.add_function(wrap_pyfunction!(format_frame, m)?)?;
    Ok(())
}
