/// 리만 제타 함수의 첫 15개 비자명 영점 허수부 t_n (모달 주파수)
pub const ZETA_ZERO_ORDINATES: [f64; 15] = [
    14.13472514,
    21.02203964,
    25.01085758,
    30.42487613,
    32.93506159,
    37.58617816,
    40.91871901,
    43.32707328,
    48.00515088,
    49.77383248,
    52.97032148,
    56.4462477,
    59.347044,
    60.83177852,
    65.11254405,
];
