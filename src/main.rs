use std::sync::Arc;

use switch_mm::compute::{ComputeConfig, CpuCompute};
use switch_mm::layer::Layers;
use switch_mm::tensor::{Blob, Filler, TensorDesc};

fn main() {
    let compute = match CpuCompute::new(ComputeConfig::default()) {
        Ok(compute) => Arc::new(compute),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    let mut layer = Layers::switch_shared::<f32>(compute);

    let mut bottom = vec![
        Blob::from_values(TensorDesc::new(2, 1, 1, 1), vec![0.0, 1.0]),
        Blob::from_values(TensorDesc::new(2, 1, 1, 2), vec![10.0, 20.0, -1.0, -2.0]),
        Blob::from_values(TensorDesc::new(2, 1, 1, 2), vec![-3.0, -4.0, 30.0, 40.0]),
    ];
    let mut top = vec![Blob::unallocated()];

    layer.reshape(&bottom, &mut top);
    layer.forward(&bottom, &mut top);
    println!("{} {}", layer.name(), layer.config_string().unwrap_or_default());
    println!(
        "output dims {:?}, {} bytes",
        top[0].desc().to_dims(),
        layer.memory_requirements(top[0].desc())
    );
    println!("selector: {:?}", bottom[0].values());
    println!("output:   {:?}", top[0].values());

    Filler::Uniform { min: -1.0, max: 1.0 }.fill_gradients_seeded(&mut top[0], 727);

    layer.backward(&top, &[false, true, true], &mut bottom);
    println!("output gradients:      {:?}", top[0].gradients());
    println!("candidate 0 gradients: {:?}", bottom[1].gradients());
    println!("candidate 1 gradients: {:?}", bottom[2].gradients());
}
