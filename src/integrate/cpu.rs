//! CPU implementation of triangle integration algorithms.

use numr::error::Result;
use numr::runtime::cpu::{CpuClient, CpuRuntime};
use numr::tensor::Tensor;

use crate::integrate::error::IntegrateResult;
use crate::integrate::impl_generic::{adaptive_triangle_quad_impl, triangle_quad_impl};
use crate::integrate::traits::{AdaptiveTriangleTensorResult, TriangleIntegrationAlgorithms};
use crate::integrate::triangle::{AdaptiveTriangleOptions, QuadratureScheme, SumFn};

impl TriangleIntegrationAlgorithms<CpuRuntime> for CpuClient {
    fn triangle_quad<F>(
        &self,
        f: F,
        triangles: &Tensor<CpuRuntime>,
        scheme: &QuadratureScheme,
        sum_fn: SumFn,
    ) -> IntegrateResult<Tensor<CpuRuntime>>
    where
        F: Fn(&Tensor<CpuRuntime>) -> Result<Tensor<CpuRuntime>>,
    {
        triangle_quad_impl(self, f, triangles, scheme, sum_fn)
    }

    fn adaptive_triangle_quad<F>(
        &self,
        f: F,
        triangles: &Tensor<CpuRuntime>,
        eps: f64,
        options: &AdaptiveTriangleOptions,
    ) -> IntegrateResult<AdaptiveTriangleTensorResult<CpuRuntime>>
    where
        F: Fn(&Tensor<CpuRuntime>) -> Result<Tensor<CpuRuntime>>,
    {
        adaptive_triangle_quad_impl(self, f, triangles, eps, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrate::error::IntegrateError;
    use crate::integrate::triangle::{Points, TriangleBatch, adaptive_integrate, kahan_sum};
    use numr::runtime::cpu::CpuDevice;

    fn setup() -> (CpuDevice, CpuClient) {
        let device = CpuDevice::new();
        let client = CpuClient::new(device.clone());
        (device, client)
    }

    #[test]
    fn test_triangle_quad_cpu() {
        let (device, client) = setup();

        // unit square as two triangles, [2, 3, 2]
        let tri = Tensor::<CpuRuntime>::from_slice(
            &[
                0.0, 0.0, 1.0, 0.0, 1.0, 1.0, //
                0.0, 0.0, 1.0, 1.0, 0.0, 1.0,
            ],
            &[2, 3, 2],
            &device,
        );

        // f(x, y) = x + y, integral over the square is 1
        let result = client
            .triangle_quad(
                |x| {
                    let data: Vec<f64> = x.to_vec();
                    let n = x.shape()[1];
                    let sum: Vec<f64> = (0..n).map(|i| data[i] + data[n + i]).collect();
                    Ok(Tensor::<CpuRuntime>::from_slice(&sum, &[n], &device))
                },
                &tri,
                &QuadratureScheme::strang_fix_3(),
                kahan_sum,
            )
            .unwrap();

        assert_eq!(result.shape(), &[2]);
        let values: Vec<f64> = result.to_vec();
        assert!((values[0] + values[1] - 1.0).abs() < 1e-14);
        // lower triangle: int of x + y over y <= x is 1/3 + 1/6
        assert!((values[0] - 0.5).abs() < 1e-14);
    }

    #[test]
    fn test_triangle_quad_vector_valued_cpu() {
        let (device, client) = setup();
        let tri =
            Tensor::<CpuRuntime>::from_slice(&[0.0, 0.0, 1.0, 0.0, 0.0, 1.0], &[3, 2], &device);

        // components [1, x]
        let result = client
            .triangle_quad(
                |x| {
                    let data: Vec<f64> = x.to_vec();
                    let n = x.shape()[1];
                    let mut out = vec![1.0; n];
                    out.extend_from_slice(&data[..n]);
                    Ok(Tensor::<CpuRuntime>::from_slice(&out, &[2, n], &device))
                },
                &tri,
                &QuadratureScheme::radon_7(),
                kahan_sum,
            )
            .unwrap();

        assert_eq!(result.shape(), &[2, 1]);
        let values: Vec<f64> = result.to_vec();
        assert!((values[0] - 0.5).abs() < 1e-15);
        assert!((values[1] - 1.0 / 6.0).abs() < 1e-15);
    }

    #[test]
    fn test_adaptive_triangle_quad_cpu_matches_core() {
        let (device, client) = setup();
        let tri =
            Tensor::<CpuRuntime>::from_slice(&[0.0, 0.0, 1.0, 0.0, 0.0, 1.0], &[3, 2], &device);
        let options = AdaptiveTriangleOptions::default();

        let result = client
            .adaptive_triangle_quad(
                |x| {
                    let data: Vec<f64> = x.to_vec();
                    let n = x.shape()[1];
                    let v: Vec<f64> = (0..n).map(|i| (data[i] + data[n + i]).exp()).collect();
                    Ok(Tensor::<CpuRuntime>::from_slice(&v, &[n], &device))
                },
                &tri,
                1e-10,
                &options,
            )
            .unwrap();

        let core = adaptive_integrate(
            |p: &Points| -> Vec<f64> {
                p.axis(0)
                    .iter()
                    .zip(p.axis(1))
                    .map(|(x, y)| (x + y).exp())
                    .collect()
            },
            &TriangleBatch::single([[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]).unwrap(),
            1e-10,
            &options,
        )
        .unwrap();

        assert!(result.integral.shape().is_empty());
        let integral: Vec<f64> = result.integral.to_vec();
        assert_eq!(integral[0], core.integral[0]);
        assert_eq!(result.rounds, core.rounds);
        assert_eq!(result.neval, core.neval);
        assert!((integral[0] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_triangle_quad_broadcast_output_cpu() {
        let (device, client) = setup();
        let tri = Tensor::<CpuRuntime>::from_slice(
            &[
                0.0, 0.0, 1.0, 0.0, 0.0, 1.0, //
                0.0, 0.0, 2.0, 0.0, 0.0, 3.0,
            ],
            &[2, 3, 2],
            &device,
        );

        // a [1] output stands for the same value at every point
        let result = client
            .triangle_quad(
                |_| Ok(Tensor::<CpuRuntime>::from_slice(&[2.0], &[1], &device)),
                &tri,
                &QuadratureScheme::radon_7(),
                kahan_sum,
            )
            .unwrap();

        assert_eq!(result.shape(), &[2]);
        let values: Vec<f64> = result.to_vec();
        assert!((values[0] - 1.0).abs() < 1e-14);
        assert!((values[1] - 6.0).abs() < 1e-14);
    }

    #[test]
    fn test_adaptive_triangle_quad_vector_valued_cpu() {
        let (device, client) = setup();
        let tri =
            Tensor::<CpuRuntime>::from_slice(&[0.0, 0.0, 1.0, 0.0, 0.0, 1.0], &[3, 2], &device);

        // components [1, exp(x + y)]
        let result = client
            .adaptive_triangle_quad(
                |x| {
                    let data: Vec<f64> = x.to_vec();
                    let n = x.shape()[1];
                    let mut out = vec![1.0; n];
                    out.extend((0..n).map(|i| (data[i] + data[n + i]).exp()));
                    Ok(Tensor::<CpuRuntime>::from_slice(&out, &[2, n], &device))
                },
                &tri,
                1e-10,
                &AdaptiveTriangleOptions::default(),
            )
            .unwrap();

        assert_eq!(result.integral.shape(), &[2]);
        assert_eq!(result.error.shape(), &[2]);
        let integral: Vec<f64> = result.integral.to_vec();
        assert!((integral[0] - 0.5).abs() < 1e-13);
        assert!((integral[1] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_bad_shapes_cpu() {
        let (device, client) = setup();

        let flat = Tensor::<CpuRuntime>::from_slice(&[0.0; 6], &[6], &device);
        let err = client
            .triangle_quad(
                |x| Ok(x.clone()),
                &flat,
                &QuadratureScheme::centroid(),
                kahan_sum,
            )
            .unwrap_err();
        assert!(matches!(err, IntegrateError::InvalidInput { .. }));

        let tri =
            Tensor::<CpuRuntime>::from_slice(&[0.0, 0.0, 1.0, 0.0, 0.0, 1.0], &[3, 2], &device);
        let err = client
            .triangle_quad(
                |_| Ok(Tensor::<CpuRuntime>::from_slice(&[1.0; 8], &[2, 2, 2], &device)),
                &tri,
                &QuadratureScheme::centroid(),
                kahan_sum,
            )
            .unwrap_err();
        assert!(matches!(err, IntegrateError::ShapeMismatch { .. }));
    }
}
