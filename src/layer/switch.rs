// Per batch item, copies the candidate named by the selector to the output.
// The Layer methods panic on a contract violation; try_* return the error.

use std::sync::Arc;

use log::{debug, trace};

use crate::{
    compute::{copy, CpuCompute},
    error::LayerError,
    tensor::{Blob, Element, TensorDesc},
};

use super::layer::Layer;

const NAME: &str = "Switch";

// One selector plus at least two candidates
const MIN_INPUTS: usize = 3;

// Bottom blobs split into the selector and its candidates
pub struct SwitchBottom<'a, T: Element> {
    pub selector: &'a Blob<T>,
    pub candidates: &'a [Blob<T>],
}

impl<'a, T: Element> SwitchBottom<'a, T> {
    pub fn split(bottom: &'a [Blob<T>]) -> Result<Self, LayerError> {
        check_input_count(bottom.len())?;
        let (selector, candidates) = bottom
            .split_first()
            .ok_or(LayerError::InputCount { layer: NAME, min: MIN_INPUTS, got: 0 })?;
        Ok(Self { selector, candidates })
    }
}

// Writable candidates for the backward pass
pub struct SwitchBottomMut<'a, T: Element> {
    pub selector: &'a Blob<T>,
    pub candidates: &'a mut [Blob<T>],
}

impl<'a, T: Element> SwitchBottomMut<'a, T> {
    pub fn split(bottom: &'a mut [Blob<T>]) -> Result<Self, LayerError> {
        check_input_count(bottom.len())?;
        let (selector, candidates) = bottom
            .split_first_mut()
            .ok_or(LayerError::InputCount { layer: NAME, min: MIN_INPUTS, got: 0 })?;
        Ok(Self { selector: &*selector, candidates })
    }
}

pub struct SwitchLayer {
    compute: Arc<CpuCompute>,
    // Set by reshape, read by forward and backward
    shape: Option<TensorDesc>,
    candidate_count: usize,
}

impl SwitchLayer {
    pub fn new() -> Self {
        Self::new_with(Arc::new(CpuCompute::default()))
    }

    pub fn new_with(compute: Arc<CpuCompute>) -> Self {
        Self {
            compute,
            shape: None,
            candidate_count: 0,
        }
    }

    pub fn shape(&self) -> Option<TensorDesc> {
        self.shape
    }

    pub fn try_reshape<T: Element>(&mut self, bottom: &[Blob<T>], top: &mut [Blob<T>]) -> Result<(), LayerError> {
        let inputs = SwitchBottom::split(bottom)?;
        check_output_count(top.len())?;

        let shape = *inputs.candidates[0].desc();
        check_inputs(inputs.selector, inputs.candidates, &shape)?;

        top[0].reshape(shape);
        self.shape = Some(shape);
        self.candidate_count = inputs.candidates.len();

        debug!(
            "{} reshaped to {} over {} candidates ({})",
            NAME,
            shape,
            self.candidate_count,
            T::NAME
        );
        Ok(())
    }

    pub fn try_forward<T: Element>(&self, bottom: &[Blob<T>], top: &mut [Blob<T>]) -> Result<(), LayerError> {
        let shape = self.shape.ok_or(LayerError::NotReshaped { layer: NAME })?;
        let inputs = SwitchBottom::split(bottom)?;
        check_output_count(top.len())?;
        check_inputs(inputs.selector, inputs.candidates, &shape)?;
        check_output(&top[0], &shape)?;

        let selected = select(inputs.selector, shape.num, inputs.candidates.len())?;
        trace!("{} forward over {} items", NAME, shape.num);

        let item_len = shape.item_elements();
        let candidates = inputs.candidates;
        self.compute.for_each_item(item_len, top[0].values_mut(), |i, item| {
            let candidate = &candidates[selected[i]];
            copy(item_len, &candidate.values()[candidate.offset(i)..], item);
        });

        Ok(())
    }

    pub fn try_backward<T: Element>(
        &self,
        top: &[Blob<T>],
        propagate_down: &[bool],
        bottom: &mut [Blob<T>],
    ) -> Result<(), LayerError> {
        let shape = self.shape.ok_or(LayerError::NotReshaped { layer: NAME })?;
        check_output_count(top.len())?;
        if propagate_down.len() != bottom.len() {
            return Err(LayerError::PropagateCount {
                layer: NAME,
                expected: bottom.len(),
                got: propagate_down.len(),
            });
        }

        let output = &top[0];
        check_output(output, &shape)?;
        let inputs = SwitchBottomMut::split(bottom)?;
        check_inputs(inputs.selector, inputs.candidates, &shape)?;

        // The range check repeats forward's so a selector edited in between is caught
        let selected = select(inputs.selector, shape.num, inputs.candidates.len())?;
        trace!("{} backward over {} items", NAME, shape.num);

        let item_len = shape.item_elements();
        let output_gradients = output.gradients();

        // propagate_down[0] belongs to the selector, which has no gradient
        for (k, candidate) in inputs.candidates.iter_mut().enumerate() {
            if !propagate_down[k + 1] || !selected.contains(&k) {
                continue;
            }

            self.compute.for_each_item(item_len, candidate.gradients_mut(), |i, item| {
                if selected[i] == k {
                    copy(item_len, &output_gradients[output.offset(i)..], item);
                }
            });
        }

        Ok(())
    }
}

impl Default for SwitchLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> Layer<T> for SwitchLayer {
    fn name(&self) -> String {
        NAME.to_string()
    }

    fn config_string(&self) -> Option<String> {
        self.shape
            .map(|shape| format!("shape={}, candidates={}", shape, self.candidate_count))
    }

    fn input_requirements(&self) -> (usize, Option<usize>) {
        (MIN_INPUTS, None)
    }

    fn reshape(&mut self, bottom: &[Blob<T>], top: &mut [Blob<T>]) {
        fatal(self.try_reshape(bottom, top));
    }

    fn forward(&self, bottom: &[Blob<T>], top: &mut [Blob<T>]) {
        fatal(self.try_forward(bottom, top));
    }

    fn backward(&self, top: &[Blob<T>], propagate_down: &[bool], bottom: &mut [Blob<T>]) {
        fatal(self.try_backward(top, propagate_down, bottom));
    }
}

#[track_caller]
fn fatal(result: Result<(), LayerError>) {
    if let Err(e) = result {
        panic!("{} layer: {}", NAME, e);
    }
}

fn check_input_count(got: usize) -> Result<(), LayerError> {
    if got < MIN_INPUTS {
        return Err(LayerError::InputCount { layer: NAME, min: MIN_INPUTS, got });
    }
    Ok(())
}

fn check_output_count(got: usize) -> Result<(), LayerError> {
    if got != 1 {
        return Err(LayerError::OutputCount { layer: NAME, expected: 1, got });
    }
    Ok(())
}

fn check_inputs<T: Element>(selector: &Blob<T>, candidates: &[Blob<T>], shape: &TensorDesc) -> Result<(), LayerError> {
    for (index, candidate) in candidates.iter().enumerate() {
        if candidate.desc() != shape {
            return Err(LayerError::CandidateShape {
                index,
                expected: *shape,
                got: *candidate.desc(),
            });
        }
    }

    if *selector.desc() != TensorDesc::new(shape.num, 1, 1, 1) {
        return Err(LayerError::SelectorShape {
            num: shape.num,
            got: *selector.desc(),
        });
    }

    Ok(())
}

fn check_output<T: Element>(output: &Blob<T>, shape: &TensorDesc) -> Result<(), LayerError> {
    if output.desc() != shape || !output.is_allocated() {
        return Err(LayerError::OutputShape {
            expected: *shape,
            got: *output.desc(),
        });
    }
    Ok(())
}

// Candidate index for every batch item
fn select<T: Element>(selector: &Blob<T>, num: usize, candidates: usize) -> Result<Vec<usize>, LayerError> {
    selector.values()[..num]
        .iter()
        .enumerate()
        .map(|(item, &value)| {
            if !value.is_integral() {
                return Err(LayerError::NonIntegralSelector { item, value: value.to_f64() });
            }
            value
                .to_index()
                .filter(|&k| k < candidates)
                .ok_or(LayerError::SelectorOutOfRange {
                    item,
                    value: value.to_f64(),
                    candidates,
                })
        })
        .collect()
}
