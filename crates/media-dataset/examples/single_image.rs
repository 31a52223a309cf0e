use media_dataset::transform::{Normalize, ToTensor, Transform};
use media_dataset::{MediaDataset, MediaDatasetConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let path = args.next().ok_or("usage: single_image <image> [config.json]")?;
    let config = match args.next() {
        Some(file) => MediaDatasetConfig::load(file)?,
        None => MediaDatasetConfig::default(),
    };

    // ImageNet statistics, RGB input only.
    let normalize = Normalize::new(&[0.485, 0.456, 0.406], &[0.229, 0.224, 0.225]);
    let transform = ToTensor.then(normalize);
    let dataset = MediaDataset::from_config(&path, transform, &config)?;

    println!("Kind: {:?}", dataset.kind());
    println!("Items: {}", dataset.len());

    for tensor in &dataset {
        let tensor = tensor?;
        println!("Shape: {:?}", tensor.shape);
    }

    println!("Items left: {}", dataset.len());
    Ok(())
}
