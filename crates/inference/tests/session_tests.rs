use inference::{DetectorThresholds, Device, HandLandmarker, InferError, ModelSource, OnnxSession};

#[test]
fn test_missing_model_file() {
    let result = OnnxSession::load(ModelSource::from("/nonexistent/palm.onnx"), &Device::Cpu);
    assert!(matches!(result, Err(InferError::ModelLoad(_))));
}

#[test]
fn test_invalid_model_bytes() {
    let result = OnnxSession::load(ModelSource::Memory(b"not a model".to_vec()), &Device::Cpu);
    assert!(matches!(result, Err(InferError::ModelLoad(_))));
}

#[cfg(not(feature = "cuda"))]
#[test]
fn test_cuda_without_feature() {
    let result = HandLandmarker::new(
        "/nonexistent/palm.onnx",
        "/nonexistent/landmark.onnx",
        Device::Cuda { device_id: 0 },
        DetectorThresholds::default(),
    );
    assert!(matches!(result, Err(InferError::UnsupportedDevice(_))));
}

#[test]
fn test_model_source_read_missing() {
    assert!(ModelSource::read("/nonexistent/palm.onnx").is_err());
}

#[test]
fn test_device_display() {
    assert_eq!(Device::default(), Device::Cpu);
    assert_eq!(Device::Cuda { device_id: 1 }.to_string(), "CUDA(device_id=1)");
    let err = InferError::UnsupportedDevice(Device::Cuda { device_id: 1 });
    assert_eq!(err.to_string(), "unsupported device: CUDA(device_id=1)");
}

#[test]
fn test_default_thresholds_are_valid() {
    let thresholds = DetectorThresholds::default();
    assert_eq!(thresholds.max_hands, 2);
    assert!(thresholds.validate().is_ok());
}

#[test]
fn test_out_of_range_threshold_rejected() {
    let thresholds = DetectorThresholds {
        presence: 1.5,
        ..DetectorThresholds::default()
    };
    match thresholds.validate() {
        Err(InferError::Config(msg)) => assert!(msg.contains("presence")),
        other => panic!("Expected InferError::Config, got {:?}", other),
    }
    let nan = DetectorThresholds {
        nms: f32::NAN,
        ..DetectorThresholds::default()
    };
    assert!(nan.validate().is_err());
}

#[test]
fn test_zero_max_hands_rejected() {
    let thresholds = DetectorThresholds {
        max_hands: 0,
        ..DetectorThresholds::default()
    };
    assert!(matches!(thresholds.validate(), Err(InferError::Config(_))));
}

#[test]
fn test_thresholds_checked_before_models_load() {
    let thresholds = DetectorThresholds {
        palm: -0.1,
        ..DetectorThresholds::default()
    };
    let result = HandLandmarker::new(
        "/nonexistent/palm.onnx",
        "/nonexistent/landmark.onnx",
        Device::Cpu,
        thresholds,
    );
    assert!(matches!(result, Err(InferError::Config(_))));
}
