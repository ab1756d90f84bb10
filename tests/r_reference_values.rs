// Reference tests whose expected values were computed externally with R
// (extraDistr::dhnorm/phnorm/qhnorm, dzip/pzip/qzip, ddirmnom) and
// cross-checked against closed forms where available.
//
// NaN/Inf equality is handled by util::assert_slice_close.

mod util;

mod half_normal_reference {
    use super::util::{assert_close, assert_slice_close};
    use dist_kernels::distributions::half_normal::{
        half_normal_cdf, half_normal_pdf, half_normal_quantile,
    };
    use dist_kernels::ScalarBackend;

    const B: ScalarBackend = ScalarBackend;

    #[test]
    fn pdf_unit_scale() {
        let eval = half_normal_pdf(&[0.0, 0.5, 1.0, 2.0], &[1.0], false, &B);
        assert_slice_close(
            &eval.values,
            &[
                0.7978845608028654,
                0.7041306535285990,
                0.48394144903828673,
                0.10798193302637613,
            ],
            1e-13,
        );
    }

    #[test]
    fn pdf_scale_two() {
        let eval = half_normal_pdf(&[1.0, 2.0], &[2.0], false, &B);
        assert_slice_close(
            &eval.values,
            &[0.3520653267642995, 0.24197072451914337],
            1e-13,
        );
    }

    #[test]
    fn cdf_unit_scale() {
        let eval = half_normal_cdf(&[0.5, 1.0, 2.0], &[1.0], true, false, &B);
        assert_slice_close(
            &eval.values,
            &[
                0.38292492254802624,
                0.6826894921370859,
                0.9544997361036416,
            ],
            1e-12,
        );
    }

    #[test]
    fn cdf_upper_and_log() {
        let eval = half_normal_cdf(&[1.0], &[1.0], false, false, &B);
        assert_close(eval.values[0], 1.0 - 0.6826894921370859, 1e-12);
        let eval = half_normal_cdf(&[1.0], &[1.0], true, true, &B);
        assert_close(eval.values[0], 0.6826894921370859_f64.ln(), 1e-12);
    }

    #[test]
    fn quantile_values() {
        let eval = half_normal_quantile(&[0.5, 0.95], &[1.0], true, false, &B);
        assert_slice_close(
            &eval.values,
            &[0.6744897501960817, 1.959963984540054],
            1e-9,
        );
        let eval = half_normal_quantile(&[0.5], &[2.0], true, false, &B);
        assert_close(eval.values[0], 1.3489795003921634, 1e-9);
    }

    #[test]
    fn quantile_edges() {
        let eval = half_normal_quantile(&[0.0, 1.0], &[1.0], true, false, &B);
        assert_close(eval.values[0], 0.0, 1e-15);
        assert_close(eval.values[1], f64::INFINITY, 0.0);
    }
}

mod zero_inflated_poisson_reference {
    use super::util::{assert_close, assert_slice_close};
    use dist_kernels::distributions::zero_inflated_poisson::{zip_cdf, zip_pmf, zip_quantile};
    use dist_kernels::ScalarBackend;

    const B: ScalarBackend = ScalarBackend;

    #[test]
    fn pmf_values() {
        let eval = zip_pmf(&[0.0, 1.0, 2.0, 3.0], &[2.0], &[0.3], false, &B);
        assert_slice_close(
            &eval.values,
            &[
                0.3947346982656289,
                0.18946939653125778,
                0.18946939653125778,
                0.12631293102083849,
            ],
            1e-13,
        );
    }

    #[test]
    fn pmf_degenerates_to_poisson() {
        let eval = zip_pmf(&[2.0], &[2.0], &[0.0], false, &B);
        assert_close(eval.values[0], 0.2706705664732254, 1e-13);
    }

    #[test]
    fn cdf_values() {
        let eval = zip_cdf(&[2.0, 5.0], &[2.0], &[0.3], true, false, &B);
        assert_slice_close(
            &eval.values,
            &[0.7736734913281445, 0.9884054740635699],
            1e-12,
        );
        let eval = zip_cdf(&[2.0], &[2.0], &[0.3], false, false, &B);
        assert_close(eval.values[0], 0.2263265086718555, 1e-12);
    }

    #[test]
    fn quantile_values() {
        let eval = zip_quantile(&[0.2, 0.5, 0.9], &[2.0], &[0.3], true, false, &B);
        assert_slice_close(&eval.values, &[0.0, 1.0, 4.0], 0.0);
    }
}

mod dirichlet_multinomial_reference {
    use super::util::assert_close;
    use dist_kernels::distributions::dirichlet_multinomial::dirichlet_multinomial_pmf;
    use dist_kernels::ScalarBackend;

    const B: ScalarBackend = ScalarBackend;

    #[test]
    fn symmetric_unit_alpha_is_uniform() {
        // k = 2, alpha = (1, 1): every composition of n has mass 1/(n + 1)
        for n in 1..=6 {
            let x = [2.0_f64.min(n as f64), (n as f64 - 2.0).max(0.0)];
            let eval =
                dirichlet_multinomial_pmf(&x, 2, &[n as f64], &[1.0, 1.0], 2, false, &B).unwrap();
            assert_close(eval.values[0], 1.0 / (n as f64 + 1.0), 1e-13);
        }
    }

    #[test]
    fn asymmetric_alpha_value() {
        let eval =
            dirichlet_multinomial_pmf(&[1.0, 2.0, 3.0], 3, &[6.0], &[1.0, 2.0, 3.0], 3, false, &B)
                .unwrap();
        assert_close(eval.values[0], 5.0 / 77.0, 1e-13);
    }

    #[test]
    fn log_value() {
        let eval =
            dirichlet_multinomial_pmf(&[2.0, 3.0], 2, &[5.0], &[1.0, 1.0], 2, true, &B).unwrap();
        assert_close(eval.values[0], (1.0_f64 / 6.0).ln(), 1e-13);
    }
}
