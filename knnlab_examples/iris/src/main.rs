// BSD 3-Clause License
//
// Copyright (c) 2025, BlackPortal ○
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice, this
//    list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
//    this list of conditions and the following disclaimer in the documentation
//    and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its
//    contributors may be used to endorse or promote products derived from
//    this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
// OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

mod cli;

use clap::Parser;
use knnlab::LabelNames;
use knnlab::classifier::KNN;
use knnlab::data::{
    CsvHeadersLoader, CsvLoader, SplitConfig, load_data, load_iris, train_test_split,
};
use log::info;

use crate::cli::Cli;

/// Installs `env_logger`, mapping `-v` counts to a default level that `RUST_LOG` overrides.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let data = match &cli.csv {
        Some(path) if cli.headers => load_data::<CsvHeadersLoader, _>(path)?,
        Some(path) => load_data::<CsvLoader, _>(path)?,
        None => load_iris()?,
    };
    info!("Dataset: {} samples, {} features", data.n_samples(), data.n_features());

    let config = SplitConfig::new(cli.split).with_seed(cli.seed);
    let split = train_test_split(&data.features, &data.labels, &config)?;
    println!("Training set: {} samples", split.x_train.nrows());
    println!("Test set: {} samples", split.x_test.nrows());

    let mut builder = KNN::new().k(cli.k).normalize(cli.normalize);
    if let Some(class_names) = &data.class_names {
        builder = builder.num_classes(class_names.len());
    }
    let mut model = builder.build();
    model.fit(&split.x_train, &split.y_train)?;
    let predictions = model.predict(&split.x_test)?;

    if cli.show_predictions {
        let names = LabelNames::new(data.class_names.iter().flatten().cloned());
        for (i, (&predicted, &actual)) in predictions.iter().zip(split.y_test.iter()).enumerate() {
            let marker = if predicted == actual { ' ' } else { '*' };
            println!(
                "{} {:>4}  predicted {:<12} actual {}",
                marker,
                i,
                names.display(predicted),
                names.display(actual)
            );
        }
    }

    let accuracy = model.calculate_accuracy(&predictions, &split.y_test)?;
    println!("Accuracy = {}", accuracy);
    Ok(())
}
