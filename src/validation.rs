//! Input validation for GA scheduling runs.
//!
//! Checks the job catalog, machine set and run parameters once, before
//! any generation runs. The first failing check is reported:
//! 1. The job catalog is non-empty
//! 2. The machine set is non-empty
//! 3. Machine identifiers are unique
//! 4. Every processing time is finite and positive
//! 5. The run parameters are usable (see [`validate_config`])
//!
//! Explicit initial populations are checked separately by
//! [`validate_population`].

use std::collections::HashSet;

use crate::error::ScheduleError;
use crate::ga::{GaConfig, Individual};
use crate::models::{JobCatalog, MachineSet};

/// Validates the inputs of a scheduling run.
///
/// # Returns
/// `Ok(())` if all checks pass, otherwise the first [`ScheduleError`] found.
pub fn validate_input(
    catalog: &JobCatalog,
    machines: &MachineSet,
    config: &GaConfig,
) -> Result<(), ScheduleError> {
    if catalog.is_empty() {
        return Err(ScheduleError::EmptyJobCatalog);
    }
    if machines.is_empty() {
        return Err(ScheduleError::EmptyMachineSet);
    }
    let mut machine_ids = HashSet::new();
    for id in machines.machines() {
        if !machine_ids.insert(id.as_str()) {
            return Err(ScheduleError::DuplicateMachine {
                machine_id: id.clone(),
            });
        }
    }
    if let Some(job) = catalog
        .jobs()
        .iter()
        .find(|j| !j.has_valid_processing_time())
    {
        return Err(ScheduleError::InvalidProcessingTime {
            job_id: job.id.clone(),
            value: job.processing_time,
        });
    }
    validate_config(config)
}

/// Validates run parameters.
///
/// Checks:
/// 1. `population_size >= 1`
/// 2. `mutation_rate` lies in `[0, 1]`
/// 3. When children must be bred (`population_size > elite_count`), the
///    parent pool holds at least two individuals
///
/// `generation_count` is unsigned; negative counts cannot be expressed.
pub fn validate_config(config: &GaConfig) -> Result<(), ScheduleError> {
    if config.population_size < 1 {
        return Err(ScheduleError::invalid_config(
            "population_size must be at least 1",
        ));
    }
    if !(0.0..=1.0).contains(&config.mutation_rate) {
        return Err(ScheduleError::invalid_config(format!(
            "mutation_rate must be within [0, 1], got {}",
            config.mutation_rate
        )));
    }
    let breeds_children = config.population_size > config.elite_count;
    let pool = config.parent_pool_size.min(config.population_size);
    if breeds_children && pool < 2 {
        return Err(ScheduleError::invalid_config(format!(
            "parent pool of {pool} cannot supply two distinct parents"
        )));
    }
    Ok(())
}

/// Checks that an individual has one gene per catalog job and that every
/// gene references an existing job and machine.
pub fn validate_individual(
    individual: &Individual,
    catalog: &JobCatalog,
    machines: &MachineSet,
) -> Result<(), ScheduleError> {
    if individual.len() != catalog.len() {
        return Err(ScheduleError::GeneCountMismatch {
            genes: individual.len(),
            expected: catalog.len(),
        });
    }
    if let Some((position, gene)) = individual
        .genes()
        .iter()
        .enumerate()
        .find(|(_, g)| g.job >= catalog.len() || g.machine >= machines.len())
    {
        return Err(ScheduleError::GeneOutOfRange {
            position,
            job: gene.job,
            machine: gene.machine,
        });
    }
    Ok(())
}

/// Validates an explicit initial population.
///
/// The population must hold exactly `config.population_size` individuals,
/// each passing [`validate_individual`]. The first offending individual
/// is reported as [`ScheduleError::InvalidPopulation`].
pub fn validate_population(
    population: &[Individual],
    catalog: &JobCatalog,
    machines: &MachineSet,
    config: &GaConfig,
) -> Result<(), ScheduleError> {
    if population.len() != config.population_size {
        return Err(ScheduleError::invalid_config(format!(
            "initial population holds {} individuals, population_size is {}",
            population.len(),
            config.population_size
        )));
    }
    for (index, individual) in population.iter().enumerate() {
        validate_individual(individual, catalog, machines).map_err(|source| {
            ScheduleError::InvalidPopulation {
                index,
                source: Box::new(source),
            }
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::Gene;
    use crate::models::Job;

    fn sample_catalog() -> JobCatalog {
        JobCatalog::new(vec![Job::new("J1", 3.0), Job::new("J2", 5.0)])
    }

    #[test]
    fn test_valid_input() {
        let result = validate_input(&sample_catalog(), &MachineSet::default(), &GaConfig::default());
        assert!(result.is_ok());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = JobCatalog::default();
        let err = validate_input(&catalog, &MachineSet::default(), &GaConfig::default()).unwrap_err();
        assert_eq!(err, ScheduleError::EmptyJobCatalog);
    }

    #[test]
    fn test_empty_machine_set() {
        let machines = MachineSet::new(Vec::<String>::new());
        let err = validate_input(&sample_catalog(), &machines, &GaConfig::default()).unwrap_err();
        assert_eq!(err, ScheduleError::EmptyMachineSet);
    }

    #[test]
    fn test_duplicate_machine_id() {
        let machines = MachineSet::new(["M1", "M2", "M1"]);
        let err = validate_input(&sample_catalog(), &machines, &GaConfig::default()).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::DuplicateMachine {
                machine_id: "M1".into()
            }
        );
        let distinct = MachineSet::numbered(4);
        assert!(validate_input(&sample_catalog(), &distinct, &GaConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_catalog_reported_first() {
        let machines = MachineSet::new(Vec::<String>::new());
        let config = GaConfig::default().with_population_size(0);
        let err = validate_input(&JobCatalog::default(), &machines, &config).unwrap_err();
        assert_eq!(err, ScheduleError::EmptyJobCatalog);
    }

    #[test]
    fn test_invalid_processing_time_names_job() {
        for bad in [0.0, -3.0, f64::INFINITY] {
            let catalog = JobCatalog::new(vec![Job::new("J1", 3.0), Job::new("J2", bad)]);
            let err = validate_input(&catalog, &MachineSet::default(), &GaConfig::default())
                .unwrap_err();
            assert_eq!(
                err,
                ScheduleError::InvalidProcessingTime {
                    job_id: "J2".into(),
                    value: bad
                }
            );
        }
    }

    #[test]
    fn test_nan_processing_time() {
        let catalog = JobCatalog::new(vec![Job::new("J9", f64::NAN)]);
        let err = validate_input(&catalog, &MachineSet::default(), &GaConfig::default())
            .unwrap_err();
        match err {
            ScheduleError::InvalidProcessingTime { job_id, value } => {
                assert_eq!(job_id, "J9");
                assert!(value.is_nan());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_zero_population() {
        let config = GaConfig::default().with_population_size(0);
        assert!(matches!(
            validate_config(&config),
            Err(ScheduleError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_mutation_rate_range() {
        for rate in [-0.01, 1.01, f64::NAN] {
            let config = GaConfig::default().with_mutation_rate(rate);
            assert!(matches!(
                validate_config(&config),
                Err(ScheduleError::InvalidConfiguration(_))
            ));
        }
        for rate in [0.0, 0.5, 1.0] {
            assert!(validate_config(&GaConfig::default().with_mutation_rate(rate)).is_ok());
        }
    }

    #[test]
    fn test_parent_pool_too_small() {
        let config = GaConfig::default().with_parent_pool_size(1);
        assert!(validate_config(&config).is_err());

        // One individual, no elites: no second parent exists.
        let config = GaConfig::default()
            .with_population_size(1)
            .with_elite_count(0);
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_elites_only_population() {
        // Every slot is an elite; parents are never sampled.
        let config = GaConfig::default()
            .with_population_size(2)
            .with_parent_pool_size(0);
        assert!(validate_config(&config).is_ok());

        let config = GaConfig::default().with_population_size(1);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_individual_gene_count() {
        let catalog = sample_catalog();
        let ind = Individual::from_genes(vec![Gene::new(0, 0)]);
        let err = validate_individual(&ind, &catalog, &MachineSet::default()).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::GeneCountMismatch {
                genes: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn test_individual_out_of_range_job_and_machine() {
        let catalog = sample_catalog();
        let machines = MachineSet::new(["M1"]);

        let ind = Individual::from_genes(vec![Gene::new(0, 0), Gene::new(99, 0)]);
        let err = validate_individual(&ind, &catalog, &machines).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::GeneOutOfRange {
                position: 1,
                job: 99,
                machine: 0
            }
        );

        let ind = Individual::from_genes(vec![Gene::new(0, 5), Gene::new(1, 0)]);
        let err = validate_individual(&ind, &catalog, &machines).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::GeneOutOfRange {
                position: 0,
                job: 0,
                machine: 5
            }
        );

        let ind = Individual::from_genes(vec![Gene::new(1, 0), Gene::new(1, 0)]);
        assert!(validate_individual(&ind, &catalog, &machines).is_ok());
    }

    #[test]
    fn test_population_size_and_members() {
        let catalog = sample_catalog();
        let machines = MachineSet::default();
        let config = GaConfig::default().with_population_size(2);
        let good = Individual::from_genes(vec![Gene::new(0, 0), Gene::new(1, 2)]);
        let bad = Individual::from_genes(vec![Gene::new(99, 0), Gene::new(99, 1)]);

        let population = vec![good.clone(), good.clone()];
        assert!(validate_population(&population, &catalog, &machines, &config).is_ok());

        let err = validate_population(&[good.clone()], &catalog, &machines, &config).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidConfiguration(_)));

        let err = validate_population(&[good, bad], &catalog, &machines, &config).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::InvalidPopulation {
                index: 1,
                source: Box::new(ScheduleError::GeneOutOfRange {
                    position: 0,
                    job: 99,
                    machine: 0
                }),
            }
        );
    }
}
