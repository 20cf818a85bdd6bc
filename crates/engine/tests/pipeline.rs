//! End-to-end control pipeline scenarios: shaping, events, and the derived
//! directional accessors, driven through the full runtime.

use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_relative_eq;
use openinput_engine::prelude::*;

fn runtime_with_pad() -> InputRuntime<VirtualInputPort> {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let mut port = VirtualInputPort::new();
    port.set_device_names(["Xbox 360 Controller"]);
    let mut runtime = InputRuntime::with_builtin_profiles(port).unwrap();
    runtime.update(0.016);
    runtime
}

fn pad_id(runtime: &InputRuntime<VirtualInputPort>) -> DeviceId {
    runtime
        .registry()
        .devices()
        .iter()
        .find(|d| !d.is_keyboard_class())
        .map(Device::id)
        .unwrap()
}

fn pad<'a>(runtime: &'a InputRuntime<VirtualInputPort>) -> &'a Device {
    runtime.registry().device(pad_id(runtime)).unwrap()
}

#[test]
fn stick_axis_is_dead_zone_remapped() {
    let mut runtime = runtime_with_pad();

    // Midpoint of the default [0.2, 0.9] dead-zone band remaps to 0.5.
    runtime.port_mut().set_axis(0, 0, 0.55);
    runtime.update(0.016);

    let value = pad(&runtime).control(ControlKind::LeftStickX, None).value();
    assert_relative_eq!(value, 0.5, epsilon = 1.0e-3);
}

#[test]
fn circular_dead_zone_is_isotropic_end_to_end() {
    let mut runtime = runtime_with_pad();

    runtime.port_mut().set_axis(0, 0, 0.5);
    runtime.port_mut().set_axis(0, 1, 0.0);
    runtime.update(0.016);
    let axial = pad(&runtime).control(ControlKind::LeftStickX, None).value();

    runtime.port_mut().set_axis(0, 0, 0.353_553);
    runtime.port_mut().set_axis(0, 1, 0.353_553);
    runtime.update(0.016);
    let device = pad(&runtime);
    let dx = device.control(ControlKind::LeftStickX, None).value();
    let dy = device.control(ControlKind::LeftStickY, None).value();
    let diagonal = (dx * dx + dy * dy).sqrt();

    assert_relative_eq!(axial.abs(), diagonal, epsilon = 1.0e-3);
}

#[test]
fn trigger_uses_binding_dead_zone_override() {
    let mut runtime = runtime_with_pad();

    // Below the trigger's overridden 0.1 lower bound: still zero.
    runtime.port_mut().set_axis(0, 2, 0.05);
    runtime.update(0.016);
    assert_relative_eq!(
        pad(&runtime).control(ControlKind::LeftTrigger, None).value(),
        0.0
    );

    // Beyond the overridden 0.95 upper bound: saturated.
    runtime.port_mut().set_axis(0, 2, 0.97);
    runtime.update(0.016);
    assert_relative_eq!(
        pad(&runtime).control(ControlKind::LeftTrigger, None).value(),
        1.0
    );
}

#[test]
fn change_events_reach_subscribers_with_payload() {
    let mut runtime = runtime_with_pad();
    let expected_device = pad_id(&runtime);

    let seen: Rc<RefCell<Vec<InputEvent>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    runtime.registry_mut().subscribe(move |event| {
        if event.control == ControlKind::Action1 {
            sink.borrow_mut().push(event.clone());
        }
    });

    runtime.port_mut().set_button(0, 0, true);
    runtime.update(0.016);

    let events = seen.borrow();
    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.device, expected_device);
    assert_eq!(event.device_name, "Xbox 360 Controller");
    assert!(event.state);
    assert_relative_eq!(event.value, 1.0);
    assert_eq!(event.player, None);
}

#[test]
fn obverse_paired_axes_notify_every_sampled_tick() {
    let mut runtime = runtime_with_pad();

    let counts: Rc<RefCell<(u32, u32)>> = Rc::new(RefCell::new((0, 0)));
    let sink = Rc::clone(&counts);
    runtime.registry_mut().subscribe(move |event| {
        let mut counts = sink.borrow_mut();
        match event.control {
            ControlKind::LeftStickX => counts.0 += 1,
            ControlKind::LeftStickY => counts.1 += 1,
            _ => {}
        }
    });

    // Deflect only the X axis; Y's committed value never changes, but its
    // effective direction is coupled to X, so it must still notify.
    runtime.port_mut().set_axis(0, 0, 1.0);
    runtime.update(0.016);
    runtime.update(0.016);

    let (x_events, y_events) = *counts.borrow();
    assert_eq!(x_events, 2, "X notifies on change and on the steady tick");
    assert_eq!(y_events, 2, "paired Y notifies despite an unchanged value");
}

#[test]
fn player_assignment_flows_into_events() {
    let mut runtime = runtime_with_pad();
    let id = pad_id(&runtime);
    runtime.registry_mut().device_mut(id).unwrap().player = Some(2);

    let seen: Rc<RefCell<Vec<Option<u32>>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    runtime.registry_mut().subscribe(move |event| {
        if event.control == ControlKind::Action2 {
            sink.borrow_mut().push(event.player);
        }
    });

    runtime.port_mut().set_button(0, 1, true);
    runtime.update(0.016);

    assert_eq!(seen.borrow().as_slice(), &[Some(2)]);
}

#[test]
fn direction_honors_inversion_flag() {
    let mut runtime = runtime_with_pad();
    let id = pad_id(&runtime);

    runtime.port_mut().set_button(0, 10, true); // dpad up
    runtime.update(0.016);

    let (_, y) = runtime.registry().direction(id).unwrap();
    assert_relative_eq!(y, 1.0);

    runtime.registry_mut().config_mut().invert_y_axis = true;
    let (_, y) = runtime.registry().direction(id).unwrap();
    assert_relative_eq!(y, -1.0);
}

#[test]
fn keyboard_wasd_and_mouse_drive_the_sticks() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let mut runtime = InputRuntime::with_builtin_profiles(VirtualInputPort::new()).unwrap();
    runtime.update(0.016);

    let keyboard_id = runtime
        .registry()
        .devices()
        .iter()
        .find(|d| d.is_keyboard_class())
        .map(Device::id)
        .unwrap();

    runtime.port_mut().press_key("d");
    runtime
        .port_mut()
        .set_mouse_delta(PointerAxis::X, 0.3);
    runtime.update(0.016);

    let keyboard = runtime.registry().device(keyboard_id).unwrap();
    // Key axes run through an identity dead zone.
    assert_relative_eq!(
        keyboard.control(ControlKind::LeftStickX, None).value(),
        1.0
    );
    // Mouse deltas bypass shaping and only get the profile's 0.1 scale.
    assert_relative_eq!(
        keyboard.control(ControlKind::RightStickX, None).value(),
        0.03,
        epsilon = 1.0e-6
    );
}

#[test]
fn smoothing_limits_step_per_tick_for_low_sensitivity_profiles() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let mut port = VirtualInputPort::new();
    port.set_device_names(["Slow Pad"]);
    let mut runtime = InputRuntime::with_builtin_profiles(port).unwrap();
    runtime
        .manager_mut()
        .catalog_mut()
        .register(
            DeviceProfile::new("Slow Pad")
                .with_names(["Slow Pad"])
                .with_sensitivity(0.5)
                .with_binding(ControlBinding::new(
                    ControlKind::LeftStickX,
                    "Left Stick X",
                    RawSource::Axis { index: 0 },
                )),
        )
        .unwrap();
    runtime.update(0.016);

    let id = runtime
        .registry()
        .devices()
        .iter()
        .find(|d| d.name() == "Slow Pad")
        .map(Device::id)
        .unwrap();

    let dt = 0.001;
    let max_delta = dt * 0.5 * 100.0;
    runtime.port_mut().set_axis(0, 0, 1.0);

    let mut previous = 0.0;
    for _ in 0..5 {
        runtime.update(dt);
        let value = runtime
            .registry()
            .device(id)
            .unwrap()
            .control(ControlKind::LeftStickX, None)
            .value();
        assert!(
            value - previous <= max_delta + 1.0e-5,
            "step {} exceeds rate limit {}",
            value - previous,
            max_delta
        );
        assert!(value >= previous);
        previous = value;
    }
    assert!(previous > 0.0);
    assert!(previous < 1.0, "five rate-limited ticks cannot reach full scale");
}

#[test]
fn active_device_follows_most_recent_change() {
    let mut runtime = runtime_with_pad();
    let id = pad_id(&runtime);

    runtime.port_mut().set_button(0, 0, true);
    runtime.update(0.016);

    assert_eq!(runtime.registry().active_device().map(Device::id), Some(id));
}
