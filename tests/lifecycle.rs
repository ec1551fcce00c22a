use maf::{FilterError, Kernel, Lifecycle, MovingAverage};

#[test]
fn test_caller_owned_storage() {
    let mut filter: MovingAverage<16> = MovingAverage::uninit();
    assert_eq!(filter.lifecycle(), Lifecycle::Uninitialized);
    assert_eq!(filter.window(), Err(FilterError::InvalidState));

    filter.init(4).expect("Valid window");

    assert!(filter.is_ready());
    assert_eq!(filter.capacity(), 16);
    assert_eq!(filter.window_length(), 4);
    assert_eq!(filter.step(4.0), Ok(1.0));
}

#[test]
fn test_default_is_uninitialized() {
    let filter: MovingAverage<4> = MovingAverage::default();
    assert_eq!(filter.lifecycle(), Lifecycle::Uninitialized);
}

#[test]
fn test_init_rejects_bad_lengths() {
    let mut filter: MovingAverage<4> = MovingAverage::uninit();

    assert_eq!(filter.init(0), Err(FilterError::InvalidArgument));
    assert_eq!(filter.init(5), Err(FilterError::AllocationFailure));
    // Storage stays inert
    assert_eq!(filter.lifecycle(), Lifecycle::Uninitialized);
    assert_eq!(filter.step(1.0), Err(FilterError::InvalidState));
}

#[test]
fn test_reinit_resets_history_and_kernel() {
    let mut filter: MovingAverage<8> = MovingAverage::new(3).expect("Valid window");
    filter.set_kernel(Kernel::Weighted, &[0.5, 0.3, 0.2]).unwrap();
    filter.step(9.0).unwrap();

    filter.init(2).expect("Valid window");

    assert_eq!(filter.window().unwrap(), &[0.0, 0.0]);
    assert!(matches!(filter.kernel(), Kernel::SimpleAverage));
    assert!(filter.kernel_params().is_empty());
}

#[test]
fn test_destroy_twice() {
    let mut filter: MovingAverage<4> = MovingAverage::new(4).expect("Valid window");

    assert_eq!(filter.destroy(), Ok(()));
    assert_eq!(filter.destroy(), Err(FilterError::InvalidState));
    assert_eq!(filter.lifecycle(), Lifecycle::Destroyed);
}

#[test]
fn test_destroyed_instance_fails_cleanly() {
    let mut filter: MovingAverage<4> = MovingAverage::new(4).expect("Valid window");
    filter.destroy().unwrap();

    assert_eq!(filter.step(1.0), Err(FilterError::InvalidState));
    assert_eq!(filter.fill(1.0), Err(FilterError::InvalidState));
    assert_eq!(filter.set_simple_average(), Err(FilterError::InvalidState));
    assert_eq!(
        filter.set_kernel(Kernel::SimpleAverage, &[]),
        Err(FilterError::InvalidState)
    );
    assert_eq!(filter.window(), Err(FilterError::InvalidState));
    assert_eq!(filter.kernel_sum(), Err(FilterError::InvalidState));

    let mut out = [0.0; 1];
    assert_eq!(filter.process(&[1.0], &mut out), Err(FilterError::InvalidState));
}

#[test]
fn test_destroyed_instance_can_be_reinitialized() {
    let mut filter: MovingAverage<4> = MovingAverage::new(4).expect("Valid window");
    filter.destroy().unwrap();

    filter.init(2).expect("Valid window");
    assert_eq!(filter.step(2.0), Ok(1.0));
}

#[cfg(feature = "alloc")]
mod boxed {
    use super::*;

    #[test]
    fn test_boxed_matches_owned() {
        let mut owned: MovingAverage<8> = MovingAverage::new(3).expect("Valid window");
        let mut boxed: Box<MovingAverage<8>> = MovingAverage::boxed(3).expect("Valid window");

        for &sample in &[3.0, 6.0, 9.0, 1.0, 2.0] {
            assert_eq!(owned.step(sample), boxed.step(sample));
        }
    }

    #[test]
    fn test_boxed_rejects_zero_window() {
        assert_eq!(
            MovingAverage::<8>::boxed(0).err(),
            Some(FilterError::InvalidArgument)
        );
    }

    #[test]
    fn test_release_boxed() {
        let filter = MovingAverage::<8>::boxed(4).expect("Valid window");
        assert_eq!(MovingAverage::release(filter), Ok(()));
    }

    #[test]
    fn test_release_after_destroy_reports_state() {
        let mut filter = MovingAverage::<8>::boxed(4).expect("Valid window");
        filter.destroy().unwrap();

        assert_eq!(MovingAverage::release(filter), Err(FilterError::InvalidState));
    }
}

#[test]
fn test_independent_instances_across_threads() {
    let handles: Vec<_> = (1..=4)
        .map(|len| {
            std::thread::spawn(move || {
                let mut filter: MovingAverage<4> = MovingAverage::new(len).expect("Valid window");
                filter.fill(1.0).unwrap();
                filter.step(1.0).unwrap()
            })
        })
        .collect();

    for handle in handles {
        let out = handle.join().expect("Thread completed");
        assert!((out - 1.0).abs() < 1e-6);
    }
}
