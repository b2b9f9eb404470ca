use crate::domain::errors::SimulationError;
use crate::interface_adapters::protocol::SimulateRequest;

// Structural and range checks on the inbound request. Runs before any
// external call; the required field set depends on the parameter mode.
pub fn validate(request: &SimulateRequest) -> Result<(), SimulationError> {
    if request.neo_id.is_some() {
        // Identifier mode: diameter and velocity come from the providers.
        if request.lat.is_none() {
            return Err(missing("lat"));
        }
        if request.lon.is_none() {
            return Err(missing("lon"));
        }
        if request.density_kg_m3.is_none() {
            return Err(missing("density_kg_m3"));
        }
    } else {
        if request.lat.is_none() {
            return Err(missing("lat"));
        }
        if request.lon.is_none() {
            return Err(missing("lon"));
        }
        if request.diameter_m.is_none() {
            return Err(missing("diameter_m"));
        }
        if request.density_kg_m3.is_none() {
            return Err(missing("density_kg_m3"));
        }
        if request.velocity_kms.is_none() {
            return Err(missing("velocity_kms"));
        }
    }

    if let (Some(lat), Some(lon)) = (request.lat, request.lon) {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(out_of_range("lat must be within [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(out_of_range("lon must be within [-180, 180]"));
        }
    }

    if let Some(angle_deg) = request.angle_deg {
        if !(5.0..=85.0).contains(&angle_deg) {
            return Err(out_of_range("angle_deg out of range (5-85)"));
        }
    }

    // Positivity is checked on every supplied field regardless of mode, so a
    // manual-mode field sent alongside a neo_id is still validated.
    if let Some(diameter_m) = request.diameter_m {
        if diameter_m <= 0.0 {
            return Err(out_of_range("diameter_m must be > 0"));
        }
    }
    if let Some(density_kg_m3) = request.density_kg_m3 {
        if density_kg_m3 <= 0.0 {
            return Err(out_of_range("density_kg_m3 must be > 0"));
        }
    }
    if let Some(velocity_kms) = request.velocity_kms {
        if velocity_kms <= 0.0 {
            return Err(out_of_range("velocity_kms must be > 0"));
        }
    }

    Ok(())
}

fn missing(field: &str) -> SimulationError {
    SimulationError::Validation(format!("missing '{field}'"))
}

fn out_of_range(message: &str) -> SimulationError {
    SimulationError::Validation(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_manual() -> SimulateRequest {
        SimulateRequest {
            lat: Some(40.0),
            lon: Some(-100.0),
            diameter_m: Some(50.0),
            density_kg_m3: Some(3000.0),
            velocity_kms: Some(20.0),
            ..SimulateRequest::default()
        }
    }

    fn minimal_neo() -> SimulateRequest {
        SimulateRequest {
            lat: Some(40.0),
            lon: Some(-100.0),
            density_kg_m3: Some(3000.0),
            neo_id: Some("3542519".to_string()),
            ..SimulateRequest::default()
        }
    }

    fn message_of(result: Result<(), SimulationError>) -> String {
        match result {
            Err(SimulationError::Validation(message)) => message,
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn accepts_a_minimal_valid_manual_request() {
        assert!(validate(&minimal_manual()).is_ok());
    }

    #[test]
    fn accepts_a_minimal_valid_identifier_request() {
        assert!(validate(&minimal_neo()).is_ok());
    }

    #[test]
    fn rejects_a_manual_request_missing_lat() {
        let request = SimulateRequest {
            lat: None,
            ..minimal_manual()
        };
        assert_eq!(message_of(validate(&request)), "missing 'lat'");
    }

    #[test]
    fn rejects_an_identifier_request_missing_density() {
        let request = SimulateRequest {
            density_kg_m3: None,
            ..minimal_neo()
        };
        assert_eq!(message_of(validate(&request)), "missing 'density_kg_m3'");
    }

    #[test]
    fn rejects_a_manual_request_missing_velocity() {
        let request = SimulateRequest {
            velocity_kms: None,
            ..minimal_manual()
        };
        assert_eq!(message_of(validate(&request)), "missing 'velocity_kms'");
    }

    #[test]
    fn rejects_latitude_beyond_ninety() {
        let request = SimulateRequest {
            lat: Some(95.0),
            ..minimal_manual()
        };
        assert!(validate(&request).is_err());
    }

    #[test]
    fn rejects_longitude_beyond_one_eighty() {
        let request = SimulateRequest {
            lon: Some(-181.0),
            ..minimal_manual()
        };
        assert!(validate(&request).is_err());
    }

    #[test]
    fn rejects_a_ninety_degree_impact_angle() {
        let request = SimulateRequest {
            angle_deg: Some(90.0),
            ..minimal_manual()
        };
        assert!(validate(&request).is_err());
    }

    #[test]
    fn accepts_the_angle_range_bounds() {
        for angle_deg in [5.0, 85.0] {
            let request = SimulateRequest {
                angle_deg: Some(angle_deg),
                ..minimal_manual()
            };
            assert!(validate(&request).is_ok());
        }
    }

    #[test]
    fn rejects_zero_velocity() {
        let request = SimulateRequest {
            velocity_kms: Some(0.0),
            ..minimal_manual()
        };
        assert_eq!(message_of(validate(&request)), "velocity_kms must be > 0");
    }

    #[test]
    fn rejects_negative_density() {
        let request = SimulateRequest {
            density_kg_m3: Some(-1.0),
            ..minimal_manual()
        };
        assert!(validate(&request).is_err());
    }

    #[test]
    fn still_validates_manual_fields_sent_alongside_an_identifier() {
        // Identifier mode ignores the manual velocity, but a nonsensical
        // value is rejected anyway.
        let request = SimulateRequest {
            velocity_kms: Some(0.0),
            ..minimal_neo()
        };
        assert_eq!(message_of(validate(&request)), "velocity_kms must be > 0");
    }
}
