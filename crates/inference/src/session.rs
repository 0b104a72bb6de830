use crate::{Device, InferError, ModelSource};
use base::Tensor;
use ndarray::ArrayD;
use ort::{inputs, session::Session as OrtSession, value::TensorRef};

/// A loaded ONNX model with a single input.
///
/// Outputs are returned in the order the model declares them.
pub struct OnnxSession {
    session: OrtSession,
    input_name: String,
    output_names: Vec<String>,
}

impl OnnxSession {
    pub fn load(model: ModelSource, device: &Device) -> Result<Self, InferError> {
        let mut builder = OrtSession::builder().map_err(|e| {
            InferError::Runtime(format!("failed to create session builder: {}", e))
        })?;

        builder = match device {
            Device::Cpu => {
                log::debug!("using CPU execution provider");
                builder
            }
            #[cfg(feature = "cuda")]
            Device::Cuda { device_id } => {
                use ort::ep::ExecutionProvider;
                use ort::execution_providers::CUDAExecutionProvider;
                let ep = CUDAExecutionProvider::default().with_device_id(*device_id);
                let available = ep.is_available().unwrap_or(false);
                log::info!(
                    "CUDA execution provider requested (device_id={}), available: {}",
                    device_id,
                    available
                );
                builder
                    .with_execution_providers([ep.build()])
                    .map_err(|_| InferError::UnsupportedDevice(device.clone()))?
            }
            #[cfg(not(feature = "cuda"))]
            Device::Cuda { .. } => {
                return Err(InferError::UnsupportedDevice(device.clone()));
            }
        };

        let session = match model {
            ModelSource::File(path) => builder.commit_from_file(&path).map_err(|e| {
                InferError::ModelLoad(format!("failed to load {}: {}", path.display(), e))
            })?,
            ModelSource::Memory(bytes) => builder.commit_from_memory(&bytes).map_err(|e| {
                InferError::ModelLoad(format!("failed to load model from memory: {}", e))
            })?,
        };

        let input_name = session
            .inputs()
            .first()
            .map(|input| input.name().to_string())
            .ok_or_else(|| InferError::ModelLoad("model declares no inputs".to_string()))?;
        let output_names: Vec<String> = session
            .outputs()
            .iter()
            .map(|output| output.name().to_string())
            .collect();

        log::debug!("model input '{}', outputs {:?}", input_name, output_names);

        Ok(Self {
            session,
            input_name,
            output_names,
        })
    }

    pub fn output_names(&self) -> &[String] {
        &self.output_names
    }

    pub fn run(&mut self, input: Tensor<f32>) -> Result<Vec<Tensor<f32>>, InferError> {
        let array = tensor_to_ndarray(input)?;
        let tensor_ref = TensorRef::from_array_view(array.view()).map_err(|e| {
            InferError::Runtime(format!("failed to create tensor ref: {}", e))
        })?;
        let outputs = self
            .session
            .run(inputs![self.input_name.as_str() => tensor_ref])
            .map_err(|e| InferError::Runtime(format!("inference failed: {}", e)))?;

        let mut result = Vec::with_capacity(self.output_names.len());
        for output_name in &self.output_names {
            let array = outputs[output_name.as_str()]
                .try_extract_array::<f32>()
                .map_err(|e| {
                    InferError::Runtime(format!("output '{}' is not f32: {}", output_name, e))
                })?;
            result.push(ndarray_to_tensor(array)?);
        }
        Ok(result)
    }
}

pub fn tensor_to_ndarray(tensor: Tensor<f32>) -> Result<ArrayD<f32>, InferError> {
    ArrayD::from_shape_vec(tensor.shape, tensor.data)
        .map_err(|e| InferError::Shape(format!("failed to create ndarray from tensor: {}", e)))
}

pub fn ndarray_to_tensor(
    array: ndarray::ArrayView<'_, f32, ndarray::IxDyn>,
) -> Result<Tensor<f32>, InferError> {
    let shape = array.shape().to_vec();
    let data = array.iter().copied().collect();
    Ok(Tensor::new(shape, data)?)
}
