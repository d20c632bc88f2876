use std::ffi::CStr;
use std::sync::Arc;
use std::ptr;
use std::thread::JoinHandle;
use libc::{c_char, c_int};

use crate::drive::arbiter::OverrideButtons;
use crate::drive::controller::{compute_frame, DriveController};
use crate::drive::input::InputSnapshot;
use crate::drive::mapper::SpeedMapper;
use crate::serial::frame::CommandFrame;

pub struct RoverController{
    inner: Arc<DriveController>,
    worker: Option<JoinHandle<()>>,
}

#[no_mangle]
pub unsafe extern "C" fn rover_controller_new(port: *const c_char, baud: u32) -> *mut RoverController{
    if port.is_null(){
        return ptr::null_mut();
    }

    unsafe{
        let port_str = match CStr::from_ptr(port).to_str(){
            Ok(s) => s,
            Err(_) => return ptr::null_mut(),
        };

        let handle = Box::new(RoverController{
            inner: Arc::new(DriveController::new(port_str).with_baud(baud)),
            worker: None,
        });
        Box::into_raw(handle)
    }
}

#[no_mangle]
pub unsafe extern "C" fn rover_controller_free(controller: *mut RoverController){
    if !controller.is_null(){
        unsafe{
            let mut handle = Box::from_raw(controller);
            handle.inner.shutdown();
            if let Some(worker) = handle.worker.take(){
                let _ = worker.join();
            }
        }
    }
}

#[no_mangle]
pub unsafe extern "C" fn rover_controller_start(controller: *mut RoverController) -> c_int{
    if controller.is_null(){
        return -1;
    }

    unsafe{
        let handle = &mut *controller;
        if handle.worker.is_some(){
            return 0; //already running
        }
        handle.worker = Some(Arc::clone(&handle.inner).start_background());
        1
    }
}

#[no_mangle]
pub unsafe extern "C" fn rover_controller_shutdown(controller: *mut RoverController) -> c_int{
    if controller.is_null(){
        return -1;
    }

    unsafe{
        let handle = &mut *controller;
        handle.inner.shutdown();
        if let Some(worker) = handle.worker.take(){
            let _ = worker.join();
        }
        1
    }
}

#[no_mangle]
pub unsafe extern "C" fn rover_controller_set_axes(controller: *mut RoverController, x: i32, y: i32){
    if controller.is_null(){
        return;
    }
    unsafe{
        (*controller).inner.set_axes(x, y);
    }
}

#[no_mangle]
pub unsafe extern "C" fn rover_controller_set_forward(controller: *mut RoverController, pressed: bool){
    if controller.is_null(){
        return;
    }
    unsafe{
        (*controller).inner.set_forward(pressed);
    }
}

#[no_mangle]
pub unsafe extern "C" fn rover_controller_set_backward(controller: *mut RoverController, pressed: bool){
    if controller.is_null(){
        return;
    }
    unsafe{
        (*controller).inner.set_backward(pressed);
    }
}

#[no_mangle]
pub unsafe extern "C" fn rover_controller_set_left(controller: *mut RoverController, pressed: bool){
    if controller.is_null(){
        return;
    }
    unsafe{
        (*controller).inner.set_left(pressed);
    }
}

#[no_mangle]
pub unsafe extern "C" fn rover_controller_set_right(controller: *mut RoverController, pressed: bool){
    if controller.is_null(){
        return;
    }
    unsafe{
        (*controller).inner.set_right(pressed);
    }
}

#[no_mangle]
pub unsafe extern "C" fn rover_controller_stop(controller: *mut RoverController){
    if controller.is_null(){
        return;
    }
    unsafe{
        (*controller).inner.stop();
    }
}

//pure mapping entry point: the same arithmetic the controller runs each tick
#[no_mangle]
pub unsafe extern "C" fn rover_compute_speeds(
    x: i32,
    y: i32,
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
    out_right: *mut i32,
    out_left: *mut i32,
) -> c_int{
    if out_right.is_null() || out_left.is_null(){
        return -1;
    }

    let input = InputSnapshot{
        x,
        y,
        buttons: OverrideButtons{ forward, backward, left, right },
    };
    let frame = compute_frame(&SpeedMapper::default(), &input);

    unsafe{
        *out_right = frame.right;
        *out_left = frame.left;
    }
    1
}

#[no_mangle]
pub unsafe extern "C" fn rover_format_frame(
    right: i32,
    left: i32,
    out_data: *mut u8,
    out_len: *mut usize,
    max_len: usize,
) -> c_int{
    if out_data.is_null() || out_len.is_null(){
        return -1;
    }

    let bytes = CommandFrame::new(right, left).to_bytes();
    if bytes.len() > max_len{
        return -2;
    }

    unsafe{
        ptr::copy_nonoverlapping(bytes.as_ptr(), out_data, bytes.len());
        *out_len = bytes.len();
    }
    1
}
