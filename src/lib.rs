pub mod application;

pub mod configuration;

pub mod console {
    pub mod consoleerror;
    pub mod tokenreader;
    pub mod intervalreader;
}

pub mod experiment {
    pub mod experimentresult;
    pub mod experimentrunner;
}

pub mod math {
    pub mod interval;
    pub mod integrator;

    pub mod quadrature {
        pub mod quadraturerule;
        pub mod rectanglerule;
        pub mod simpsonrule;
    }
}
